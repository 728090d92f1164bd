//! Configuration validation for uml-check.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::{AppConfig, BehaviorConfig, CheckConfig, FilterConfig, GenerateConfig, OutputConfig};
use crate::reports::ReportFormat;
use std::path::Path;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.output.validate());
        errors.extend(self.filtering.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.max_items == Some(0) {
            errors.push(ConfigError::new(
                "output.max_items",
                "must be at least 1; omit it to list every difference",
            ));
        }

        if let Some(file) = &self.file {
            let parent = file.parent().filter(|p| !p.as_os_str().is_empty());
            if let Some(parent) = parent {
                if !parent.exists() {
                    errors.push(ConfigError::new(
                        "output.file",
                        format!("directory does not exist: {}", parent.display()),
                    ));
                }
            }
            if file.is_dir() {
                errors.push(ConfigError::new(
                    "output.file",
                    format!("is a directory: {}", file.display()),
                ));
            }
        }

        errors
    }
}

impl Validatable for FilterConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        for (i, kind) in self.kinds.iter().enumerate() {
            if self.kinds[..i].contains(kind) {
                errors.push(ConfigError::new(
                    format!("filtering.kinds[{i}]"),
                    format!("duplicate kind {kind}"),
                ));
            }
        }
        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        Vec::new()
    }
}

fn check_model_path(field: &str, path: &Path, errors: &mut Vec<ConfigError>) {
    if !path.exists() {
        errors.push(ConfigError::new(
            field,
            format!("model file not found: {}", path.display()),
        ));
    } else if path.is_dir() {
        errors.push(ConfigError::new(
            field,
            format!("expected a model file, found a directory: {}", path.display()),
        ));
    }
}

impl Validatable for CheckConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        check_model_path("paths.code", &self.paths.code, &mut errors);
        check_model_path("paths.diagram", &self.paths.diagram, &mut errors);
        errors.extend(self.output.validate());
        errors.extend(self.filtering.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

impl Validatable for GenerateConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        check_model_path("code_path", &self.code_path, &mut errors);
        errors.extend(
            OutputConfig {
                format: ReportFormat::Auto,
                file: self.output_file.clone(),
                ..OutputConfig::default()
            }
            .validate(),
        );
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::DifferenceKind;
    use crate::config::CheckPaths;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_output_validation() {
        let output = OutputConfig {
            max_items: Some(0),
            file: Some(PathBuf::from("/nonexistent-dir/report.md")),
            ..OutputConfig::default()
        };
        let errors = output.validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "output.max_items");
        assert_eq!(errors[1].field, "output.file");
    }

    #[test]
    fn test_relative_output_file_is_valid() {
        let output = OutputConfig {
            file: Some(PathBuf::from("report.json")),
            ..OutputConfig::default()
        };
        assert!(output.is_valid());
    }

    #[test]
    fn test_duplicate_kinds() {
        let filtering = FilterConfig {
            min_severity: None,
            kinds: vec![
                DifferenceKind::MethodMismatch,
                DifferenceKind::ClassMissingInCode,
                DifferenceKind::MethodMismatch,
            ],
        };
        let errors = filtering.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "filtering.kinds[2]");
    }

    #[test]
    fn test_check_config_missing_models() {
        let config = CheckConfig::from_app_config(
            CheckPaths {
                code: PathBuf::from("/nonexistent/code.json"),
                diagram: PathBuf::from("/nonexistent/diagram.yaml"),
            },
            AppConfig::default(),
        );
        let errors = config.validate();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].to_string().starts_with("paths.code: model file not found"));
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::new("output.file", "bad");
        assert_eq!(error.to_string(), "output.file: bad");
    }
}
