//! Default configurations and presets for uml-check.

use super::types::{AppConfig, BehaviorConfig, ComparisonConfig, FilterConfig, OutputConfig};
use crate::compare::{ComparisonMode, Severity};
use crate::reports::ReportFormat;

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Strict comparison, fail on errors, terminal-friendly output
    Default,
    /// Diagram and code must agree exactly; warnings fail too
    Strict,
    /// Code may run ahead of the diagram
    Relaxed,
    /// Code is ground truth; the diagram is a sketch
    Minimal,
    /// CI/CD: JSON output, quiet, fail on warnings
    CiCd,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Strict => "strict",
            Self::Relaxed => "relaxed",
            Self::Minimal => "minimal",
            Self::CiCd => "ci-cd",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "strict" | "exact" => Some(Self::Strict),
            "relaxed" | "loose" => Some(Self::Relaxed),
            "minimal" | "sketch" => Some(Self::Minimal),
            "ci-cd" | "ci" | "cd" | "pipeline" => Some(Self::CiCd),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Strict comparison that fails only on errors",
            Self::Strict => "Strict comparison that also fails on warnings",
            Self::Relaxed => "Relaxed comparison for diagrams that trail the code",
            Self::Minimal => "Minimal comparison for sketch-level diagrams",
            Self::CiCd => "Machine-readable output for CI/CD pipelines",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Default,
            Self::Strict,
            Self::Relaxed,
            Self::Minimal,
            Self::CiCd,
        ]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Strict => Self::strict_preset(),
            ConfigPreset::Relaxed => Self::mode_preset(ComparisonMode::Relaxed),
            ConfigPreset::Minimal => Self::mode_preset(ComparisonMode::Minimal),
            ConfigPreset::CiCd => Self::ci_cd_preset(),
        }
    }

    /// Strict preset.
    ///
    /// - STRICT mode
    /// - Fail on warnings as well as errors
    #[must_use]
    pub fn strict_preset() -> Self {
        Self {
            comparison: ComparisonConfig {
                mode: Some(ComparisonMode::Strict),
            },
            output: OutputConfig::default(),
            filtering: FilterConfig::default(),
            behavior: BehaviorConfig {
                fail_on: Some(Severity::Warning),
                quiet: false,
            },
        }
    }

    fn mode_preset(mode: ComparisonMode) -> Self {
        Self {
            comparison: ComparisonConfig { mode: Some(mode) },
            ..Self::default()
        }
    }

    /// CI/CD pipeline preset.
    ///
    /// - JSON output for machine parsing
    /// - Fail on warnings
    /// - Quiet mode to reduce noise
    #[must_use]
    pub fn ci_cd_preset() -> Self {
        Self {
            comparison: ComparisonConfig::default(),
            output: OutputConfig {
                format: ReportFormat::Json,
                no_color: true,
                ..OutputConfig::default()
            },
            filtering: FilterConfig::default(),
            behavior: BehaviorConfig {
                fail_on: Some(Severity::Warning),
                quiet: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_names_round_trip() {
        for preset in ConfigPreset::all() {
            assert_eq!(ConfigPreset::from_name(preset.name()), Some(*preset));
        }
        assert_eq!(ConfigPreset::from_name("CI"), Some(ConfigPreset::CiCd));
        assert_eq!(ConfigPreset::from_name("unknown"), None);
    }

    #[test]
    fn test_mode_presets() {
        let relaxed = AppConfig::from_preset(ConfigPreset::Relaxed);
        assert_eq!(relaxed.comparison.mode(), ComparisonMode::Relaxed);
        assert_eq!(relaxed.behavior.fail_on(), Severity::Error);

        let minimal = AppConfig::from_preset(ConfigPreset::Minimal);
        assert_eq!(minimal.comparison.mode(), ComparisonMode::Minimal);
    }

    #[test]
    fn test_ci_cd_preset() {
        let config = AppConfig::from_preset(ConfigPreset::CiCd);
        assert_eq!(config.output.format, ReportFormat::Json);
        assert!(config.output.no_color);
        assert!(config.behavior.quiet);
        assert_eq!(config.behavior.fail_on(), Severity::Warning);
    }
}
