//! Method comparator with overload-aware matching.
//!
//! Methods are matched by signature key (name plus relaxed-normalized
//! parameter types). In relaxed mode an unmatched diagram entry may fall back
//! to any unconsumed code method with the same name, arity and pairwise
//! relaxed-equal parameters. The code-first family additionally accepts
//! name-only diagram entries that acknowledge every overload of that name.

use super::{closest_name, tip_with_hint, visibility_value};
use crate::compare::equivalence::{
    method_key, parameters_match_relaxed, types_equal_strict, visibility_rank,
};
use crate::compare::policy::{MemberFamily, VisibilityRule};
use crate::compare::result::method_location;
use crate::compare::traits::MemberComparator;
use crate::compare::{Difference, DifferenceKind, ModePolicy, Severity, MISSING};
use crate::model::{Class, Method, Visibility};

/// Compares methods of one class.
pub struct MethodComparator;

impl MethodComparator {
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
        let code_methods: Vec<&Method> = named_methods(code).collect();
        let code_keys: Vec<String> = code_methods.iter().map(|m| method_key(m)).collect();
        let mut consumed = vec![false; code_methods.len()];

        for declared in named_methods(diagram) {
            let location = method_location(&diagram.name, &declared.display_signature());
            let key = method_key(declared);

            let exact = find_unconsumed(&consumed, |i| code_keys[i] == key)
                .or_else(|| code_keys.iter().position(|k| *k == key));
            let matched = exact.or_else(|| {
                if policy.relaxed_types {
                    find_unconsumed(&consumed, |i| {
                        parameters_match_relaxed(declared, code_methods[i])
                    })
                } else {
                    None
                }
            });

            let Some(index) = matched else {
                differences.push(missing_in_code(code, declared, location));
                continue;
            };
            consumed[index] = true;
            let actual = code_methods[index];

            let (written, real) = (declared.return_type_or_void(), actual.return_type_or_void());
            if !policy.return_types_equal(written, real) {
                differences.push(return_mismatch(declared, written, real, location.clone(), Severity::Error));
            }

            match policy.method_visibility {
                VisibilityRule::Exact => {
                    if declared.visibility != actual.visibility {
                        differences.push(
                            mismatch(location, Severity::Error)
                                .summary(format!("Visibility of '{}' differs", declared.name))
                                .values(
                                    visibility_value(declared.visibility),
                                    visibility_value(actual.visibility),
                                )
                                .tip("Align the diagram visibility with the code"),
                        );
                    }
                }
                VisibilityRule::CodeMayBeMoreOpen => {
                    let d_rank = visibility_rank(declared.visibility);
                    let c_rank = visibility_rank(actual.visibility);
                    if c_rank > d_rank {
                        differences.push(
                            mismatch(location, Severity::Warning)
                                .summary(format!(
                                    "'{}' is less visible in code than the diagram promises",
                                    declared.name
                                ))
                                .values(
                                    visibility_value(declared.visibility),
                                    visibility_value(actual.visibility),
                                )
                                .tip("Narrow the diagram visibility or open up the method"),
                        );
                    } else if c_rank < d_rank {
                        differences.push(
                            mismatch(location, Severity::Info)
                                .summary(format!(
                                    "'{}' is more visible in code than in the diagram",
                                    declared.name
                                ))
                                .values(
                                    visibility_value(declared.visibility),
                                    visibility_value(actual.visibility),
                                )
                                .tip("Update the diagram visibility if the wider access is intended"),
                        );
                    }
                }
            }
        }

        for (index, method) in code_methods.iter().enumerate() {
            if consumed[index] {
                continue;
            }
            let acknowledged = named_methods(diagram)
                .any(|d| d.name == method.name && d.arity() == method.arity());
            if !acknowledged {
                differences.push(missing_in_uml(diagram, method, policy.member_only_in_code));
            }
        }

        differences
    }

    fn compare_code_first(&self, code: &Class, diagram: &Class) -> Vec<Difference> {
        let mut differences = Vec::new();
        let code_methods: Vec<&Method> = named_methods(code).collect();
        let code_keys: Vec<String> = code_methods.iter().map(|m| method_key(m)).collect();
        let mut acknowledged = vec![false; code_methods.len()];

        for declared in named_methods(diagram) {
            let location = method_location(&diagram.name, &declared.display_signature());

            let matched = if declared.is_name_only() {
                let mut first = None;
                for (index, method) in code_methods.iter().enumerate() {
                    if method.name == declared.name {
                        acknowledged[index] = true;
                        first.get_or_insert(index);
                    }
                }
                first
            } else {
                let key = method_key(declared);
                let found = find_unconsumed(&acknowledged, |i| code_keys[i] == key)
                    .or_else(|| code_keys.iter().position(|k| *k == key));
                if let Some(index) = found {
                    acknowledged[index] = true;
                }
                found
            };

            let Some(index) = matched else {
                differences.push(missing_in_code(code, declared, location));
                continue;
            };
            let actual = code_methods[index];

            if declared.is_name_only() {
                differences.push(
                    mismatch(location.clone(), Severity::Suggestion)
                        .summary(format!("Parameters of '{}' are not documented", declared.name))
                        .values(MISSING, actual.display_signature())
                        .tip(format!(
                            "Document the parameters of '{}' in the diagram",
                            declared.name
                        )),
                );
            }

            match declared.return_type.as_deref().filter(|t| !t.trim().is_empty()) {
                Some(written) => {
                    let real = actual.return_type_or_void();
                    if !types_equal_strict(written, real) {
                        differences.push(return_mismatch(declared, written, real, location.clone(), Severity::Error));
                    }
                }
                None if actual.returns_value() => differences.push(
                    mismatch(location.clone(), Severity::Suggestion)
                        .summary(format!("Return type of '{}' is not documented", declared.name))
                        .values(MISSING, actual.return_type_or_void())
                        .tip(format!(
                            "Document the return type '{}' in the diagram",
                            actual.return_type_or_void()
                        )),
                ),
                None => {}
            }

            if let Some(diff) = code_first_visibility(declared, actual, location) {
                differences.push(diff);
            }
        }

        for (index, method) in code_methods.iter().enumerate() {
            if acknowledged[index] {
                continue;
            }
            let severity = if method.visibility.is_some_and(|v| v.is_exposed()) {
                Severity::Suggestion
            } else {
                Severity::Info
            };
            differences.push(missing_in_uml(diagram, method, severity));
        }

        differences
    }
}

impl Default for MethodComparator {
    fn default() -> Self {
        Self::new()
    }
}

impl MemberComparator for MethodComparator {
    fn compare_class(&self, code: &Class, diagram: &Class, policy: &ModePolicy) -> Vec<Difference> {
        let differences = match policy.member_family {
            MemberFamily::Declared => self.compare_declared(code, diagram, policy),
            MemberFamily::CodeFirst => self.compare_code_first(code, diagram),
        };
        tracing::trace!(
            class = %diagram.name,
            differences = differences.len(),
            "methods compared"
        );
        differences
    }

    fn name(&self) -> &str {
        "MethodComparator"
    }
}

fn named_methods(class: &Class) -> impl Iterator<Item = &Method> {
    class.methods.iter().filter(|m| !m.name.trim().is_empty())
}

/// First index not yet consumed that satisfies the predicate.
fn find_unconsumed(consumed: &[bool], mut predicate: impl FnMut(usize) -> bool) -> Option<usize> {
    (0..consumed.len()).find(|&i| !consumed[i] && predicate(i))
}

/// Visibility rule for the code-first family.
///
/// A written `~` is flagged on its own rather than compared.
fn code_first_visibility(declared: &Method, actual: &Method, location: String) -> Option<Difference> {
    let diff = match declared.visibility {
        Some(Visibility::Package) => mismatch(location, Severity::Suggestion)
            .summary(format!("'{}' is declared package-private in the diagram", declared.name))
            .values(Visibility::Package.symbol(), visibility_value(actual.visibility))
            .tip("Use an explicit +, # or - visibility in the diagram"),
        Some(written) if Some(written) != actual.visibility => mismatch(location, Severity::Warning)
            .summary(format!("Visibility of '{}' differs", declared.name))
            .values(written.symbol(), visibility_value(actual.visibility))
            .tip("Align the diagram visibility with the code"),
        Some(_) => return None,
        None => mismatch(location, Severity::Suggestion)
            .summary(format!("'{}' has no visibility in the diagram", declared.name))
            .values(MISSING, visibility_value(actual.visibility))
            .tip("Declare the method's visibility in the diagram"),
    };
    Some(diff)
}

fn mismatch(location: String, severity: Severity) -> Difference {
    Difference::new(DifferenceKind::MethodMismatch, severity, location)
}

fn return_mismatch(
    declared: &Method,
    written: &str,
    real: &str,
    location: String,
    severity: Severity,
) -> Difference {
    mismatch(location, severity)
        .summary(format!("Return type of '{}' differs", declared.name))
        .values(written, real)
        .tip(format!("Change the diagram return type to '{real}'"))
}

fn missing_in_code(code: &Class, declared: &Method, location: String) -> Difference {
    let hint = closest_name(&declared.name, named_methods(code).map(|m| m.name.as_str()));
    Difference::new(DifferenceKind::MethodMissingInCode, Severity::Error, location)
        .summary(format!(
            "Method '{}' is in the diagram but not in class '{}'",
            declared.display_signature(),
            code.name
        ))
        .values(declared.display(), MISSING)
        .tip(tip_with_hint(
            format!(
                "Implement '{}' or remove it from the diagram",
                declared.display_signature()
            ),
            hint,
        ))
}

fn missing_in_uml(diagram: &Class, method: &Method, severity: Severity) -> Difference {
    Difference::new(
        DifferenceKind::MethodMissingInUml,
        severity,
        method_location(&diagram.name, &method.display_signature()),
    )
    .summary(format!(
        "Method '{}' exists in code but not in the diagram",
        method.display_signature()
    ))
    .values(MISSING, method.display())
    .tip(format!(
        "Add '{}' to class '{}' in the diagram",
        method.display_signature(),
        diagram.name
    ))
}
