//! Consistency engine comparing a code model against a diagram model.
//!
//! # Architecture
//!
//! - [`equivalence`]: strict and relaxed type equality, visibility ranking and
//!   signature keys, shared by every comparator
//! - [`ModePolicy`]: severity table selected once per run from a
//!   [`ComparisonMode`]
//! - [`comparators`]: one comparator per entity family
//! - [`ConsistencyEngine`]: runs the comparators in a fixed order and returns
//!   a [`ComparisonResult`]
//!
//! The engine is total: malformed entries (blank names, blank endpoints,
//! self-loops) are skipped rather than reported as errors.
//!
//! # Example
//!
//! ```
//! use uml_check::compare::{ComparisonMode, ConsistencyEngine, DifferenceKind};
//! use uml_check::model::{ClassKind, ModelBuilder, Provenance};
//!
//! let mut code = ModelBuilder::new(Provenance::Code);
//! code.declare_class("Order", ClassKind::Class);
//! let code = code.build();
//!
//! let mut diagram = ModelBuilder::new(Provenance::Diagram);
//! diagram.declare_class("Order", ClassKind::Class);
//! diagram.declare_class("Invoice", ClassKind::Class);
//! let diagram = diagram.build();
//!
//! let result = ConsistencyEngine::new()
//!     .with_mode(ComparisonMode::Relaxed)
//!     .compare(&code, &diagram);
//! assert_eq!(result.differences[0].kind, DifferenceKind::ClassMissingInCode);
//! ```

pub mod comparators;
mod engine;
pub mod equivalence;
mod policy;
mod result;
pub mod traits;

pub use engine::{compare_models, ConsistencyEngine};
pub use policy::{ComparisonMode, MemberFamily, ModePolicy, VisibilityRule};
pub use result::{
    attribute_location, class_location, method_location, ComparisonResult, ComparisonSummary,
    Difference, DifferenceKind, Severity, MISSING,
};
pub use traits::{Comparator, MemberComparator};
