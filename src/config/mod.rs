//! Configuration module for uml-check.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets for common use cases
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```
//! use uml_check::compare::{ComparisonMode, Severity};
//! use uml_check::config::{AppConfig, ConfigPreset};
//!
//! let config = AppConfig::from_preset(ConfigPreset::Relaxed);
//! assert_eq!(config.comparison.mode(), ComparisonMode::Relaxed);
//!
//! let config = AppConfig::builder()
//!     .mode(ComparisonMode::Minimal)
//!     .fail_on(Severity::Warning)
//!     .build();
//! assert_eq!(config.behavior.fail_on(), Severity::Warning);
//! ```
//!
//! # Configuration File
//!
//! Place a `.uml-check.yaml` file in your project root or `~/.config/uml-check/`:
//!
//! ```yaml
//! comparison:
//!   mode: relaxed
//! behavior:
//!   fail_on: WARNING
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::ConfigPreset;
pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, CheckConfig, CheckPaths, ComparisonConfig,
    FilterConfig, GenerateConfig, OutputConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    default_config_path, discover_config_file, generate_example_config, load_config_file,
    load_or_default, ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and complete `.uml-check.yaml` files.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
