//! Shared model for code-derived and diagram-derived class structures.
//!
//! Both front ends normalize into these structures before comparison. A
//! model is built once through [`ModelBuilder`] and then treated as an
//! immutable snapshot.
//!
//! ```
//! use uml_check::model::{ClassKind, Field, ModelBuilder, Provenance, RelationshipKind, Visibility};
//!
//! let mut builder = ModelBuilder::new(Provenance::Code);
//! builder.declare_class("Order", ClassKind::Class);
//! builder.add_field("Order", Field::new("id", "int").with_visibility(Visibility::Private));
//! builder.add_relationship("Order", "OrderLine", RelationshipKind::Composition);
//!
//! let model = builder.build();
//! assert!(model.class("OrderLine").is_some_and(|c| c.is_placeholder()));
//! ```

mod builder;
mod class;
mod relationship;
mod uml;

pub use builder::ModelBuilder;
pub use class::*;
pub use relationship::*;
pub use uml::*;
