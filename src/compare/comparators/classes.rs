//! Class presence comparator.

use super::{closest_name, tip_with_hint};
use crate::compare::result::class_location;
use crate::compare::traits::Comparator;
use crate::compare::{Difference, DifferenceKind, ModePolicy, Severity, MISSING};
use crate::model::UmlModel;
use std::collections::BTreeSet;

/// Reports classes declared on one side and absent from the other.
///
/// A class only counts as present when it is officially declared. A code
/// placeholder is a name the source refers to but never defines, so a
/// diagram class backed only by one is missing in code. A diagram
/// placeholder still counts as drawn: a class the diagram references is not
/// reported as missing from the diagram.
pub struct ClassComparator;

impl ClassComparator {
    pub fn new() -> Self {
        Self
    }

    /// Names officially declared in both models, sorted.
    ///
    /// These drive the member comparators.
    #[must_use]
    pub fn shared_classes(code: &UmlModel, diagram: &UmlModel) -> Vec<String> {
        let shared: BTreeSet<&str> = code
            .official_classes()
            .filter(|c| diagram.official_class(&c.name).is_some())
            .map(|c| c.name.as_str())
            .collect();
        shared.into_iter().map(str::to_string).collect()
    }
}

impl Default for ClassComparator {
    fn default() -> Self {
        Self::new()
    }
}

impl Comparator for ClassComparator {
    fn compare(&self, code: &UmlModel, diagram: &UmlModel, policy: &ModePolicy) -> Vec<Difference> {
        let mut differences = Vec::new();

        let names: BTreeSet<&str> = code
            .official_classes()
            .chain(diagram.official_classes())
            .map(|c| c.name.as_str())
            .filter(|name| !name.trim().is_empty())
            .collect();

        for name in names {
            if let Some(class) = diagram.official_class(name) {
                if code.official_class(name).is_none() {
                    let hint = closest_name(name, code.official_classes().map(|c| c.name.as_str()));
                    differences.push(
                        Difference::new(
                            DifferenceKind::ClassMissingInCode,
                            Severity::Error,
                            class_location(name),
                        )
                        .summary(format!("{} '{name}' is in the diagram but not in the code", class.kind))
                        .values(format!("{} {name}", class.kind), MISSING)
                        .tip(tip_with_hint(
                            format!("Implement '{name}' or remove it from the diagram"),
                            hint,
                        )),
                    );
                }
            }

            if let Some(class) = code.official_class(name) {
                if diagram.class(name).is_none() {
                    differences.push(
                        Difference::new(
                            DifferenceKind::ClassMissingInUml,
                            policy.class_only_in_code,
                            class_location(name),
                        )
                        .summary(format!("{} '{name}' exists in code but not in the diagram", class.kind))
                        .values(MISSING, format!("{} {name}", class.kind))
                        .tip(format!("Add '{name}' to the diagram")),
                    );
                }
            }
        }

        tracing::debug!(
            comparator = self.name(),
            differences = differences.len(),
            "class presence compared"
        );
        differences
    }

    fn name(&self) -> &str {
        "ClassComparator"
    }
}
