//! Model front ends.
//!
//! The source-code and diagram-script parsers that produce models are
//! external collaborators; they implement [`ModelParser`]. This module ships
//! the interchange front end, which reads a model that one of them (or a
//! person) serialized as JSON or YAML.
//!
//! ## Usage
//!
//! ```no_run
//! use uml_check::model::Provenance;
//! use uml_check::parsers::parse_model;
//! use std::path::Path;
//!
//! let code = parse_model(Path::new("code-model.json"), Some(Provenance::Code)).unwrap();
//! let diagram = parse_model(Path::new("diagram.yaml"), Some(Provenance::Diagram)).unwrap();
//! ```

mod interchange;
mod traits;

pub use interchange::{parameter_type, DocumentFormat, InterchangeParser};
pub use traits::{FormatConfidence, ModelParser, ParseError};

use crate::model::{Provenance, UmlModel};
use std::path::Path;

/// Maximum model file size (64 MB).
const MAX_MODEL_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// Detect the serialization format of a model document.
#[must_use]
pub fn detect_format(content: &str) -> DocumentFormat {
    DocumentFormat::detect(content)
}

/// Read and parse a model document from disk.
///
/// `provenance` overrides whatever the document declares.
pub fn parse_model(path: &Path, provenance: Option<Provenance>) -> Result<UmlModel, ParseError> {
    let metadata = std::fs::metadata(path).map_err(|e| ParseError::IoError(e.to_string()))?;
    if metadata.len() > MAX_MODEL_FILE_SIZE {
        return Err(ParseError::IoError(format!(
            "model file is {} MB, exceeding the {} MB limit",
            metadata.len() / (1024 * 1024),
            MAX_MODEL_FILE_SIZE / (1024 * 1024),
        )));
    }
    let content = std::fs::read_to_string(path).map_err(|e| ParseError::IoError(e.to_string()))?;
    parse_model_str(&content, provenance)
}

/// Parse a model document from string content.
pub fn parse_model_str(content: &str, provenance: Option<Provenance>) -> Result<UmlModel, ParseError> {
    let parser = match provenance {
        Some(p) => InterchangeParser::new().with_provenance(p),
        None => InterchangeParser::new(),
    };
    parser.parse_str(content)
}
