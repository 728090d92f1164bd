//! Parser trait definitions and error types.
//!
//! Source-code and diagram-script front ends live outside this crate; they
//! implement [`ModelParser`] and hand back a finished [`UmlModel`].

use crate::model::UmlModel;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while reading a model
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("JSON parse error: {0}")]
    JsonError(String),

    #[error("YAML parse error: {0}")]
    YamlError(String),

    #[error("Invalid model structure: {0}")]
    InvalidStructure(String),

    #[error("Unknown model format: {0}")]
    UnknownFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

impl From<std::io::Error> for ParseError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}

impl From<serde_yaml::Error> for ParseError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::YamlError(err.to_string())
    }
}

/// Confidence level for format detection
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct FormatConfidence(f32);

impl FormatConfidence {
    /// Definitely not this format
    pub const NONE: Self = Self(0.0);
    /// Might be this format
    pub const LOW: Self = Self(0.25);
    /// Almost certainly this format
    pub const HIGH: Self = Self(0.75);
    /// Definitely this format
    pub const CERTAIN: Self = Self(1.0);

    #[must_use]
    pub fn new(value: f32) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    #[must_use]
    pub fn value(&self) -> f32 {
        self.0
    }

    /// Check if this confidence indicates the format can be parsed
    #[must_use]
    pub fn can_parse(&self) -> bool {
        self.0 >= 0.25
    }
}

impl Default for FormatConfidence {
    fn default() -> Self {
        Self::NONE
    }
}

/// Trait for front ends that produce a [`UmlModel`].
///
/// Implementors provide content detection via `detect()` and parsing via
/// `parse_str()`. Every implementation is expected to go through
/// [`ModelBuilder`](crate::model::ModelBuilder) so the model invariants hold.
pub trait ModelParser {
    /// Parse a model from a file path
    fn parse(&self, path: &Path) -> Result<UmlModel, ParseError> {
        let content = std::fs::read_to_string(path)?;
        self.parse_str(&content)
    }

    /// Parse a model from string content
    fn parse_str(&self, content: &str) -> Result<UmlModel, ParseError>;

    /// Format name for logging
    fn format_name(&self) -> &str;

    /// Lightweight check of whether this parser can handle the content.
    fn detect(&self, content: &str) -> FormatConfidence;

    /// Quick check if this parser can likely handle the content
    fn can_parse(&self, content: &str) -> bool {
        self.detect(content).can_parse()
    }
}
