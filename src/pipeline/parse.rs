//! Model parsing stage.

use crate::model::{Provenance, UmlModel};
use anyhow::{Context, Result};
use std::path::Path;

/// A parsed model together with where it came from
pub struct ParsedModel {
    /// The normalized model
    pub model: UmlModel,
    /// Path the model was read from
    pub path: String,
}

impl ParsedModel {
    #[must_use]
    pub const fn model(&self) -> &UmlModel {
        &self.model
    }

    #[must_use]
    pub fn into_model(self) -> UmlModel {
        self.model
    }
}

/// Parse a model file with context for error messages.
///
/// `provenance` overrides whatever the document declares.
pub fn parse_model_with_context(
    path: &Path,
    provenance: Provenance,
    quiet: bool,
) -> Result<ParsedModel> {
    if !quiet {
        tracing::info!("Parsing {} model: {}", provenance, path.display());
    }

    let model = crate::parsers::parse_model(path, Some(provenance))
        .with_context(|| format!("Failed to parse {} model: {}", provenance, path.display()))?;

    if !quiet {
        tracing::info!(
            "Parsed {} classes, {} relationships",
            model.class_count(),
            model.relationships.len()
        );
    }

    model.log_notice_summary();

    Ok(ParsedModel {
        model,
        path: path.display().to_string(),
    })
}
