//! Field comparator for classes present on both sides.

use super::{closest_name, tip_with_hint, visibility_value};
use crate::compare::equivalence::{types_equal_strict, visibility_rank};
use crate::compare::policy::MemberFamily;
use crate::compare::result::attribute_location;
use crate::compare::traits::MemberComparator;
use crate::compare::{Difference, DifferenceKind, ModePolicy, Severity, MISSING};
use crate::model::{Class, Field, StaticFlag};
use std::collections::HashSet;

/// Compares fields by name.
///
/// Type leniency is never extended to fields: written types compare under
/// strict equality in every mode.
pub struct AttributeComparator;

impl AttributeComparator {
    pub fn new() -> Self {
        Self
    }

    fn compare_declared(
        &self,
        code: &Class,
        diagram: &Class,
        policy: &ModePolicy,
    ) -> Vec<Difference> {
        let mut differences = Vec::new();

        for field in named_fields(diagram) {
            let location = attribute_location(&diagram.name, &field.name);
            let Some(actual) = code.field(&field.name) else {
                differences.push(missing_in_code(code, field, location));
                continue;
            };

            if !types_equal_strict(field.type_or_empty(), actual.type_or_empty()) {
                differences.push(type_mismatch(field, actual, location.clone(), Severity::Error));
            }

            match field.visibility {
                None => differences.push(
                    mismatch(location.clone(), Severity::Error)
                        .summary(format!("Field '{}' has no visibility in the diagram", field.name))
                        .values(MISSING, visibility_value(actual.visibility))
                        .tip("Declare the field's visibility in the diagram"),
                ),
                Some(declared) => {
                    let d_rank = visibility_rank(Some(declared));
                    let c_rank = visibility_rank(actual.visibility);
                    if d_rank > c_rank {
                        differences.push(
                            mismatch(location.clone(), Severity::Error)
                                .summary(format!(
                                    "Diagram declares '{}' more restrictive than the code",
                                    field.name
                                ))
                                .values(declared.symbol(), visibility_value(actual.visibility))
                                .tip("Align the diagram visibility with the code"),
                        );
                    } else if d_rank < c_rank {
                        differences.push(
                            mismatch(location.clone(), Severity::Warning)
                                .summary(format!(
                                    "Diagram declares '{}' more open than the code",
                                    field.name
                                ))
                                .values(declared.symbol(), visibility_value(actual.visibility))
                                .tip("Align the diagram visibility with the code"),
                        );
                    }
                }
            }

            // Omitted diagram flag reads as "not static"
            if field.is_static.as_bool() != actual.is_static.as_bool() {
                differences.push(static_mismatch(field, actual, location, Severity::Error));
            }
        }

        let documented: HashSet<&str> = named_fields(diagram).map(|f| f.name.as_str()).collect();
        for field in named_fields(code).filter(|f| !documented.contains(f.name.as_str())) {
            differences.push(missing_in_uml(diagram, field, policy.member_only_in_code));
        }

        differences
    }

    fn compare_code_first(&self, code: &Class, diagram: &Class) -> Vec<Difference> {
        let mut differences = Vec::new();

        for field in named_fields(diagram) {
            let location = attribute_location(&diagram.name, &field.name);
            let Some(actual) = code.field(&field.name) else {
                differences.push(missing_in_code(code, field, location));
                continue;
            };

            match field.declared_type.as_deref().filter(|t| !t.trim().is_empty()) {
                Some(written) if !types_equal_strict(written, actual.type_or_empty()) => {
                    differences.push(type_mismatch(field, actual, location.clone(), Severity::Error));
                }
                Some(_) => {}
                None => differences.push(
                    mismatch(location.clone(), Severity::Suggestion)
                        .summary(format!("Field '{}' has no type in the diagram", field.name))
                        .values(MISSING, actual.type_or_empty())
                        .tip(format!("Document the type of '{}'", field.name)),
                ),
            }

            match field.visibility {
                Some(declared) if Some(declared) != actual.visibility => differences.push(
                    mismatch(location.clone(), Severity::Error)
                        .summary(format!("Visibility of '{}' differs", field.name))
                        .values(declared.symbol(), visibility_value(actual.visibility))
                        .tip("Align the diagram visibility with the code"),
                ),
                Some(_) => {}
                None => differences.push(
                    mismatch(location.clone(), Severity::Suggestion)
                        .summary(format!("Field '{}' has no visibility in the diagram", field.name))
                        .values(MISSING, visibility_value(actual.visibility))
                        .tip("Declare the field's visibility in the diagram"),
                ),
            }

            match field.is_static {
                StaticFlag::Unspecified if actual.is_static.as_bool() => differences.push(
                    mismatch(location, Severity::Suggestion)
                        .summary(format!("Static field '{}' is not marked static in the diagram", field.name))
                        .values(MISSING, actual.is_static.to_string())
                        .tip("Mark the field {static} in the diagram"),
                ),
                StaticFlag::Unspecified => {}
                written if written.as_bool() != actual.is_static.as_bool() => {
                    differences.push(static_mismatch(field, actual, location, Severity::Error));
                }
                _ => {}
            }
        }

        let documented: HashSet<&str> = named_fields(diagram).map(|f| f.name.as_str()).collect();
        for field in named_fields(code).filter(|f| !documented.contains(f.name.as_str())) {
            let severity = if field.visibility.is_some_and(|v| v.is_exposed()) {
                Severity::Suggestion
            } else {
                Severity::Info
            };
            differences.push(missing_in_uml(diagram, field, severity));
        }

        differences
    }
}

impl Default for AttributeComparator {
    fn default() -> Self {
        Self::new()
    }
}

impl MemberComparator for AttributeComparator {
    fn compare_class(&self, code: &Class, diagram: &Class, policy: &ModePolicy) -> Vec<Difference> {
        let differences = match policy.member_family {
            MemberFamily::Declared => self.compare_declared(code, diagram, policy),
            MemberFamily::CodeFirst => self.compare_code_first(code, diagram),
        };
        tracing::trace!(
            class = %diagram.name,
            differences = differences.len(),
            "fields compared"
        );
        differences
    }

    fn name(&self) -> &str {
        "AttributeComparator"
    }
}

fn named_fields(class: &Class) -> impl Iterator<Item = &Field> {
    class.fields.iter().filter(|f| !f.name.trim().is_empty())
}

fn mismatch(location: String, severity: Severity) -> Difference {
    Difference::new(DifferenceKind::AttributeMismatch, severity, location)
}

fn missing_in_code(code: &Class, field: &Field, location: String) -> Difference {
    let hint = closest_name(&field.name, named_fields(code).map(|f| f.name.as_str()));
    Difference::new(DifferenceKind::AttributeMissingInCode, Severity::Error, location)
        .summary(format!(
            "Field '{}' is in the diagram but not in class '{}'",
            field.name, code.name
        ))
        .values(field.display(), MISSING)
        .tip(tip_with_hint(
            format!("Add '{}' to the code or remove it from the diagram", field.name),
            hint,
        ))
}

fn missing_in_uml(diagram: &Class, field: &Field, severity: Severity) -> Difference {
    Difference::new(
        DifferenceKind::AttributeMissingInUml,
        severity,
        attribute_location(&diagram.name, &field.name),
    )
    .summary(format!(
        "Field '{}' exists in code but not in the diagram",
        field.name
    ))
    .values(MISSING, field.display())
    .tip(format!("Add '{}' to class '{}' in the diagram", field.name, diagram.name))
}

fn type_mismatch(field: &Field, actual: &Field, location: String, severity: Severity) -> Difference {
    let written = field.declared_type.as_deref().unwrap_or(MISSING);
    mismatch(location, severity)
        .summary(format!("Type of '{}' differs", field.name))
        .values(written, actual.type_or_empty())
        .tip(format!(
            "Change the diagram type of '{}' to '{}'",
            field.name,
            actual.type_or_empty()
        ))
}

fn static_mismatch(field: &Field, actual: &Field, location: String, severity: Severity) -> Difference {
    mismatch(location, severity)
        .summary(format!("Static modifier of '{}' differs", field.name))
        .values(field.is_static.to_string(), actual.is_static.to_string())
        .tip(if actual.is_static.as_bool() {
            "Mark the field {static} in the diagram"
        } else {
            "Remove {static} from the field in the diagram"
        })
}
