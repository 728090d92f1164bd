//! Report output stage.

use super::{auto_detect_format, should_use_color, write_output, OutputTarget};
use crate::compare::ComparisonResult;
use crate::config::CheckConfig;
use crate::reports::{create_reporter_with_options, ReportConfig, ReportFormat, ReportMetadata};
use anyhow::{Context, Result};

/// Build the renderer configuration for a check.
#[must_use]
pub fn build_report_config(config: &CheckConfig) -> ReportConfig {
    ReportConfig {
        title: None,
        max_items: config.output.max_items,
        include_tips: config.output.include_tips,
        metadata: ReportMetadata::new().with_paths(
            config.paths.code.display().to_string(),
            config.paths.diagram.display().to_string(),
        ),
    }
}

/// Render a result in a concrete format.
pub fn render_report(
    result: &ComparisonResult,
    format: ReportFormat,
    report_config: &ReportConfig,
    use_color: bool,
) -> Result<String> {
    let reporter = create_reporter_with_options(format, use_color);
    reporter
        .generate_report(result, report_config)
        .with_context(|| format!("Failed to render {format} report"))
}

/// Output a comparison report to the configured destination.
pub fn output_report(config: &CheckConfig, result: &ComparisonResult) -> Result<()> {
    let output_target = OutputTarget::from_option(config.output.file.clone());
    let effective_output = auto_detect_format(config.output.format, &output_target);
    // Color only ever goes to an interactive terminal.
    let use_color = should_use_color(config.output.no_color) && output_target.is_terminal();

    let report_config = build_report_config(config);
    let report = render_report(result, effective_output, &report_config, use_color)?;

    write_output(&report, &output_target, config.behavior.quiet)
}
