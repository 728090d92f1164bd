//! Generate command handler.
//!
//! Renders a code model as a PlantUML class diagram, for projects that do
//! not have a diagram yet.

use crate::config::{GenerateConfig, Validatable};
use crate::generate::{DiagramGenerator, PlantUmlGenerator};
use crate::model::Provenance;
use crate::pipeline::{exit_codes, parse_model_with_context, write_output, OutputTarget, PipelineError};
use anyhow::Result;

/// Run the generate command, returning the desired exit code.
#[allow(clippy::needless_pass_by_value)]
pub fn run_generate(config: GenerateConfig) -> Result<i32> {
    let errors = config.validate();
    if !errors.is_empty() {
        let reason = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(PipelineError::InvalidConfig { reason }.into());
    }

    let parsed = parse_model_with_context(&config.code_path, Provenance::Code, config.quiet)
        .map_err(|source| PipelineError::ParseFailed {
            path: config.code_path.display().to_string(),
            source,
        })?;

    let mut generator = PlantUmlGenerator::new().hide_empty_members(config.hide_empty_members);
    if let Some(title) = &config.title {
        generator = generator.with_title(title.clone());
    }
    let script = generator
        .generate(parsed.model())
        .map_err(|e| PipelineError::ReportFailed { source: e.into() })?;

    let target = OutputTarget::from_option(config.output_file.clone());
    let content = match target {
        OutputTarget::Stdout => script.trim_end(),
        OutputTarget::File(_) => script.as_str(),
    };
    write_output(content, &target, config.quiet)?;

    Ok(exit_codes::SUCCESS)
}
