//! Pipeline orchestration for consistency checks.
//!
//! Shared orchestration for the parse → compare → report workflow used by the
//! CLI command handlers. The verdict is decided here, in the calling layer;
//! the comparison engine only classifies individual differences.

mod compare_stage;
mod output;
mod parse;
mod report_stage;
mod verdict;

pub use compare_stage::{run_comparison, ComparisonOutcome};
pub use output::{auto_detect_format, should_use_color, write_output, OutputTarget};
pub use parse::{parse_model_with_context, ParsedModel};
pub use report_stage::{build_report_config, output_report, render_report};
pub use verdict::{FailPolicy, Verdict};

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to read or parse a model file
    #[error("Parse failed for {path}: {source}")]
    ParseFailed {
        path: String,
        #[source]
        source: anyhow::Error,
    },

    /// Configuration was rejected before any work started
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// Report generation or output failed
    #[error("Report failed: {source}")]
    ReportFailed {
        #[source]
        source: anyhow::Error,
    },
}

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - the models are consistent under the fail policy
    pub const SUCCESS: i32 = 0;
    /// Differences at or above the failure threshold were found
    pub const CHANGES_DETECTED: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
