//! Check command handler.
//!
//! Implements the `check` subcommand comparing a code model with a diagram.

use crate::config::{CheckConfig, Validatable};
use crate::model::Provenance;
use crate::pipeline::{output_report, parse_model_with_context, run_comparison, PipelineError};
use anyhow::Result;

/// Run the check command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
#[allow(clippy::needless_pass_by_value)]
pub fn run_check(config: CheckConfig) -> Result<i32> {
    let errors = config.validate();
    if !errors.is_empty() {
        let reason = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(PipelineError::InvalidConfig { reason }.into());
    }

    let quiet = config.behavior.quiet;

    let code = parse_model_with_context(&config.paths.code, Provenance::Code, quiet)
        .map_err(|source| PipelineError::ParseFailed {
            path: config.paths.code.display().to_string(),
            source,
        })?;
    let diagram = parse_model_with_context(&config.paths.diagram, Provenance::Diagram, quiet)
        .map_err(|source| PipelineError::ParseFailed {
            path: config.paths.diagram.display().to_string(),
            source,
        })?;

    let outcome = run_comparison(&config, code.model(), diagram.model());

    output_report(&config, &outcome.reported)
        .map_err(|source| PipelineError::ReportFailed { source })?;

    if !quiet {
        tracing::info!("Verdict: {}", outcome.verdict);
    }

    Ok(outcome.verdict.exit_code())
}
