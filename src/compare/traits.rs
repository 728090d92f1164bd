//! Trait definitions for comparison strategies.
//!
//! Whole-model comparators look at both models at once (class presence,
//! relationships). Member comparators look at one class that exists on both
//! sides. The engine composes them in a fixed order.

use super::{Difference, ModePolicy};
use crate::model::{Class, UmlModel};

/// Comparator over two complete models.
pub trait Comparator: Send + Sync {
    /// Compare a code model against a diagram model.
    fn compare(&self, code: &UmlModel, diagram: &UmlModel, policy: &ModePolicy)
        -> Vec<Difference>;

    /// Name of this comparator for logging.
    fn name(&self) -> &str;
}

/// Comparator over the members of one class present on both sides.
pub trait MemberComparator: Send + Sync {
    fn compare_class(&self, code: &Class, diagram: &Class, policy: &ModePolicy) -> Vec<Difference>;

    fn name(&self) -> &str;
}
