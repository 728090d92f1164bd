//! **Consistency checking between UML class diagrams and source code.**
//!
//! `uml-check` compares two class models of the same system, one extracted
//! from source code and one extracted from a class diagram, and reports every
//! place where they disagree: missing classes, attribute and method
//! mismatches, and relationships that exist on one side only or differ in
//! kind. Each difference carries a severity chosen by the comparison mode, so
//! a sketch-level diagram can be held to a looser standard than a design
//! document.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the shared [`UmlModel`] both front ends normalize into,
//!   assembled through [`ModelBuilder`].
//! - **[`compare`]**: the [`ConsistencyEngine`], its comparators and the
//!   mode-dependent severity policy.
//! - **[`parsers`]**: the [`ModelParser`] seam and the JSON/YAML interchange
//!   front end.
//! - **[`reports`]**: summary, JSON and Markdown renderings of a
//!   [`ComparisonResult`].
//! - **[`generate`]**: PlantUML class diagrams drafted from a model.
//! - **[`pipeline`]** and **[`cli`]**: the parse, compare, verdict and report
//!   stages behind the command-line tool.
//!
//! ## Comparing Two Models
//!
//! ```
//! use uml_check::compare::{ComparisonMode, DifferenceKind, Severity};
//! use uml_check::model::{ClassKind, Field, ModelBuilder, Provenance};
//! use uml_check::compare_models;
//!
//! let mut code = ModelBuilder::new(Provenance::Code);
//! code.declare_class("Order", ClassKind::Class);
//! code.add_field("Order", Field::new("total", "double"));
//! let code = code.build();
//!
//! let mut diagram = ModelBuilder::new(Provenance::Diagram);
//! diagram.declare_class("Order", ClassKind::Class);
//! let diagram = diagram.build();
//!
//! let result = compare_models(&code, &diagram, ComparisonMode::Strict);
//! assert_eq!(result.differences.len(), 1);
//! assert_eq!(result.differences[0].kind, DifferenceKind::AttributeMissingInUml);
//! assert_eq!(result.differences[0].severity, Severity::Error);
//! ```
//!
//! ## Checking Model Files
//!
//! ```no_run
//! use std::path::Path;
//! use uml_check::compare::ComparisonMode;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let result = uml_check::check_files(
//!         Path::new("code-model.json"),
//!         Path::new("diagram.yaml"),
//!         ComparisonMode::Relaxed,
//!     )?;
//!     for difference in &result.differences {
//!         println!("[{}] {}: {}", difference.severity, difference.location, difference.summary);
//!     }
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::too_many_lines,
    clippy::struct_excessive_bools,
    clippy::module_name_repetitions,
    clippy::similar_names
)]

pub mod cli;
pub mod compare;
pub mod config;
pub mod error;
pub mod generate;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use compare::{
    compare_models, ComparisonMode, ComparisonResult, ConsistencyEngine, Difference,
    DifferenceKind, Severity,
};
pub use config::{AppConfig, AppConfigBuilder, ConfigPreset};
pub use config::{BehaviorConfig, FilterConfig, OutputConfig};
pub use config::{ConfigError, Validatable};
pub use error::{ErrorContext, Result, UmlCheckError};
pub use generate::{DiagramGenerator, PlantUmlGenerator};
pub use model::{ModelBuilder, Provenance, UmlModel};
pub use parsers::{parse_model, parse_model_str, ModelParser};
pub use reports::{ReportFormat, ReportGenerator};

use std::path::Path;

/// Parse a code model and a diagram model from disk and compare them.
///
/// The provenance of each document is forced from its argument position, so
/// the files need not declare it.
pub fn check_files(code: &Path, diagram: &Path, mode: ComparisonMode) -> Result<ComparisonResult> {
    let code_model = parse_model(code, Some(Provenance::Code))
        .with_context(|| format!("loading code model {}", code.display()))?;
    let diagram_model = parse_model(diagram, Some(Provenance::Diagram))
        .with_context(|| format!("loading diagram {}", diagram.display()))?;
    Ok(compare_models(&code_model, &diagram_model, mode))
}
