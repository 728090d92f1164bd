//! Unified error types for uml-check.
//!
//! The comparison engine itself never fails. Errors come from reading and
//! decoding models, rendering reports and loading configuration.

use crate::parsers::ParseError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for uml-check operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum UmlCheckError {
    /// Errors while reading a model document
    #[error("Failed to parse model: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Unknown model format - expected a JSON or YAML model document")]
    UnknownFormat,

    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(String),

    #[error("Missing required field: {field} in {context}")]
    MissingField { field: String, context: String },

    #[error("Invalid field value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),

    #[error("Output format not supported for this operation: {0}")]
    UnsupportedFormat(String),

    #[error("Formatting failed: {0}")]
    FormatError(String),
}

/// Convenient Result type for uml-check operations
pub type Result<T> = std::result::Result<T, UmlCheckError>;

impl UmlCheckError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create a parse error for unknown format
    pub fn unknown_format(path: impl Into<String>) -> Self {
        Self::parse(format!("at {}", path.into()), ParseErrorKind::UnknownFormat)
    }

    /// Create a parse error for missing field
    pub fn missing_field(field: impl Into<String>, context: impl Into<String>) -> Self {
        Self::parse(
            "missing required field",
            ParseErrorKind::MissingField {
                field: field.into(),
                context: context.into(),
            },
        )
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: Some(path.into()),
            message: source.to_string(),
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a report error
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }
}

impl From<std::io::Error> for UmlCheckError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for UmlCheckError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(
            "JSON deserialization",
            ParseErrorKind::InvalidJson(err.to_string()),
        )
    }
}

impl From<serde_yaml::Error> for UmlCheckError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::parse(
            "YAML deserialization",
            ParseErrorKind::InvalidYaml(err.to_string()),
        )
    }
}

impl From<ParseError> for UmlCheckError {
    fn from(err: ParseError) -> Self {
        let kind = match err {
            ParseError::JsonError(msg) => ParseErrorKind::InvalidJson(msg),
            ParseError::YamlError(msg) => ParseErrorKind::InvalidYaml(msg),
            ParseError::UnknownFormat(_) => ParseErrorKind::UnknownFormat,
            ParseError::MissingField(field) => ParseErrorKind::MissingField {
                field,
                context: "model document".to_string(),
            },
            ParseError::InvalidStructure(msg) | ParseError::IoError(msg) => {
                ParseErrorKind::InvalidValue {
                    field: "document".to_string(),
                    message: msg,
                }
            }
        };
        Self::parse(String::new(), kind)
    }
}

/// Extension trait for adding context to errors.
///
/// Context strings chain outward, so a failure deep inside a parser reads
/// "loading diagram: reading classes: ..." by the time it reaches the CLI.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<UmlCheckError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: UmlCheckError, new_ctx: &str) -> UmlCheckError {
    match err {
        UmlCheckError::Parse {
            context: existing,
            source,
        } => UmlCheckError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        UmlCheckError::Report {
            context: existing,
            source,
        } => UmlCheckError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        UmlCheckError::Io {
            path,
            message,
            source,
        } => UmlCheckError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        UmlCheckError::Config(msg) => UmlCheckError::Config(chain_context(new_ctx, &msg)),
        UmlCheckError::Validation(msg) => UmlCheckError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Returns "`new`: `existing`", or just `new` when nothing exists yet.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = UmlCheckError::unknown_format("model.txt");
        assert!(err.to_string().contains("model.txt"));

        let err = UmlCheckError::missing_field("name", "class entry");
        assert!(err.to_string().contains("missing required field"));
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = UmlCheckError::io("/path/to/diagram.yaml", io_err);
        assert!(err.to_string().contains("/path/to/diagram.yaml"));
    }

    #[test]
    fn test_context_chaining_multiple_levels() {
        fn inner() -> Result<()> {
            Err(UmlCheckError::parse("base", ParseErrorKind::UnknownFormat))
        }

        fn outer() -> Result<()> {
            inner().context("middle layer").context("outer layer")
        }

        match outer() {
            Err(UmlCheckError::Parse { context, .. }) => {
                assert_eq!(context, "outer layer: middle layer: base");
            }
            other => panic!("Expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;
        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called);

        let err_result: Result<i32> = Err(UmlCheckError::validation("error"));
        let _ = err_result.with_context(|| {
            called = true;
            "should be called"
        });
        assert!(called);
    }

    #[test]
    fn test_parse_error_conversion() {
        let err: UmlCheckError = ParseError::YamlError("bad indent".to_string()).into();
        match err {
            UmlCheckError::Parse {
                source: ParseErrorKind::InvalidYaml(msg),
                ..
            } => assert_eq!(msg, "bad indent"),
            other => panic!("Expected YAML parse error, got {other:?}"),
        }
    }
}
