//! Configuration types for uml-check operations.
//!
//! Provides structured configuration for the check and generate operations.

use crate::compare::{ComparisonMode, DifferenceKind, Severity};
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are layered over file settings with [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Comparison settings (mode)
    pub comparison: ComparisonConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Filtering applied to the rendered report
    pub filtering: FilterConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the comparison mode.
    pub const fn mode(mut self, mode: ComparisonMode) -> Self {
        self.config.comparison.mode = Some(mode);
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Limit the differences listed per severity.
    pub const fn max_items(mut self, max_items: Option<usize>) -> Self {
        self.config.output.max_items = max_items;
        self
    }

    /// Include remediation tips in reports.
    pub const fn include_tips(mut self, include: bool) -> Self {
        self.config.output.include_tips = include;
        self
    }

    /// Hide differences below this severity in the report.
    pub const fn min_severity(mut self, severity: Option<Severity>) -> Self {
        self.config.filtering.min_severity = severity;
        self
    }

    /// Only report these difference kinds.
    pub fn kinds(mut self, kinds: Vec<DifferenceKind>) -> Self {
        self.config.filtering.kinds = kinds;
        self
    }

    /// Fail the run on differences at or above this severity.
    pub const fn fail_on(mut self, severity: Severity) -> Self {
        self.config.behavior.fail_on = Some(severity);
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Command Configuration Types
// ============================================================================

/// Configuration for a check operation
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Paths to the two models
    pub paths: CheckPaths,
    /// Comparison settings
    pub comparison: ComparisonConfig,
    /// Output settings
    pub output: OutputConfig,
    /// Report filtering
    pub filtering: FilterConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl CheckConfig {
    /// Build a check configuration from resolved application settings.
    #[must_use]
    pub fn from_app_config(paths: CheckPaths, config: AppConfig) -> Self {
        Self {
            paths,
            comparison: config.comparison,
            output: config.output,
            filtering: config.filtering,
            behavior: config.behavior,
        }
    }
}

/// Paths for a check operation
#[derive(Debug, Clone)]
pub struct CheckPaths {
    /// Model derived from source code
    pub code: PathBuf,
    /// Model derived from the class diagram
    pub diagram: PathBuf,
}

/// Configuration for a generate operation
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Model derived from source code
    pub code_path: PathBuf,
    /// Output file (None for stdout)
    pub output_file: Option<PathBuf>,
    /// Diagram title
    pub title: Option<String>,
    /// Collapse member-less classes
    pub hide_empty_members: bool,
    /// Suppress non-essential output
    pub quiet: bool,
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Comparison settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ComparisonConfig {
    /// Strictness mode: strict, relaxed, minimal (default: strict)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<ComparisonMode>,
}

impl ComparisonConfig {
    /// Effective mode.
    #[must_use]
    pub fn mode(&self) -> ComparisonMode {
        self.mode.unwrap_or_default()
    }
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// Maximum differences listed per severity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,
    /// Include remediation tips
    pub include_tips: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Auto,
            file: None,
            no_color: false,
            max_items: None,
            include_tips: true,
        }
    }
}

/// Filtering applied to reported differences.
///
/// Filtering never changes the verdict, which is computed before it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct FilterConfig {
    /// Minimum severity to report
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_severity: Option<Severity>,
    /// Only report these kinds (empty reports all)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub kinds: Vec<DifferenceKind>,
}

impl FilterConfig {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.min_severity.is_some() || !self.kinds.is_empty()
    }
}

/// Behavior flags for check operations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit with code 1 on differences at or above this severity (default: ERROR)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<Severity>,
    /// Suppress non-essential output
    pub quiet: bool,
}

impl BehaviorConfig {
    /// Effective failure threshold.
    #[must_use]
    pub fn fail_on(&self) -> Severity {
        self.fail_on.unwrap_or(Severity::Error)
    }
}
