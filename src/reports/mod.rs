//! Report generation for comparison results.
//!
//! Output formats:
//! - Summary: compact terminal output, optionally colored
//! - JSON: structured data for programmatic integration
//! - Markdown: differences grouped by severity for documentation
//!
//! All model-derived text is escaped through [`escape`] before it is embedded
//! in Markdown.

pub mod escape;
mod json;
mod markdown;
mod summary;
mod types;

pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::SummaryReporter;
pub use types::{ReportConfig, ReportFormat, ReportMetadata};

use crate::compare::ComparisonResult;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<ReportError> for crate::error::UmlCheckError {
    fn from(err: ReportError) -> Self {
        use crate::error::ReportErrorKind;
        match err {
            ReportError::IoError(source) => Self::from(source),
            ReportError::SerializationError(msg) => {
                Self::report("serializing report", ReportErrorKind::JsonSerializationError(msg))
            }
            ReportError::FormatError(e) => {
                Self::report("formatting report", ReportErrorKind::FormatError(e.to_string()))
            }
        }
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a comparison result
    fn generate_report(
        &self,
        result: &ComparisonResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Write a report to a writer
    fn write_report(
        &self,
        result: &ComparisonResult,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate_report(result, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Auto | ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_formats() {
        assert_eq!(create_reporter(ReportFormat::Json).format(), ReportFormat::Json);
        assert_eq!(
            create_reporter(ReportFormat::Markdown).format(),
            ReportFormat::Markdown
        );
        assert_eq!(
            create_reporter_with_options(ReportFormat::Auto, false).format(),
            ReportFormat::Summary
        );
    }
}
