//! Relationship comparator.
//!
//! Edges are grouped by ordered `(source, target)` pair on each side. Every
//! pair present on either side runs three independent checks: inheritance,
//! ownership strength and dependency.

use crate::compare::traits::Comparator;
use crate::compare::{Difference, DifferenceKind, ModePolicy, Severity, MISSING};
use crate::model::{pair_location, OwnershipStrength, RelationshipKind, UmlModel};
use std::collections::{BTreeMap, BTreeSet};

/// What one side says about one ordered pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct PairEdges {
    generalization: bool,
    realization: bool,
    /// Strongest ownership edge; weaker duplicates are absorbed
    ownership: Option<OwnershipStrength>,
    dependency: bool,
}

impl PairEdges {
    fn record(&mut self, kind: RelationshipKind) {
        match kind {
            RelationshipKind::Generalization => self.generalization = true,
            RelationshipKind::Realization => self.realization = true,
            RelationshipKind::Dependency => self.dependency = true,
            owning => {
                if let Some(strength) = owning.ownership() {
                    self.ownership = self.ownership.max(Some(strength));
                }
            }
        }
    }

    fn has(&self, kind: RelationshipKind) -> bool {
        match kind {
            RelationshipKind::Generalization => self.generalization,
            RelationshipKind::Realization => self.realization,
            RelationshipKind::Dependency => self.dependency,
            owning => owning.ownership().is_some() && self.ownership == owning.ownership(),
        }
    }
}

type PairIndex<'a> = BTreeMap<(&'a str, &'a str), PairEdges>;

fn index_pairs(model: &UmlModel) -> PairIndex<'_> {
    let mut index = PairIndex::new();
    for edge in model.comparable_relationships() {
        index
            .entry((edge.source.as_str(), edge.target.as_str()))
            .or_default()
            .record(edge.kind);
    }
    index
}

/// Compares the relationship sets of both models.
pub struct RelationshipComparator;

impl RelationshipComparator {
    pub fn new() -> Self {
        Self
    }

    fn check_inheritance(
        &self,
        location: &str,
        code: PairEdges,
        diagram: PairEdges,
        policy: &ModePolicy,
        out: &mut Vec<Difference>,
    ) {
        for kind in [RelationshipKind::Generalization, RelationshipKind::Realization] {
            match (code.has(kind), diagram.has(kind)) {
                (true, false) => out.push(
                    Difference::new(
                        DifferenceKind::RelationshipMissingInUml,
                        policy.structural_omission,
                        location,
                    )
                    .summary(format!("{kind} exists in code but not in the diagram"))
                    .values(MISSING, kind.name())
                    .tip(format!("Add the {kind} edge {location} to the diagram")),
                ),
                (false, true) => out.push(
                    Difference::new(
                        DifferenceKind::RelationshipMissingInCode,
                        Severity::Error,
                        location,
                    )
                    .summary(format!("{kind} is in the diagram but not in the code"))
                    .values(kind.name(), MISSING)
                    .tip(format!("Remove the {kind} edge {location} from the diagram")),
                ),
                _ => {}
            }
        }
    }

    fn check_ownership(
        &self,
        location: &str,
        code: PairEdges,
        diagram: PairEdges,
        policy: &ModePolicy,
        out: &mut Vec<Difference>,
    ) {
        match (diagram.ownership, code.ownership) {
            (Some(declared), None) => {
                let code_value = if code.dependency {
                    RelationshipKind::Dependency.name()
                } else {
                    MISSING
                };
                out.push(
                    mismatch(location, Severity::Error)
                        .summary(format!(
                            "Diagram shows {} but the code has no ownership",
                            declared.kind()
                        ))
                        .values(declared.kind().name(), code_value)
                        .tip(format!("Remove the {} edge or add the field in code", declared.kind())),
                );
            }
            // A diagram dependency for the same pair is judged by the dependency check
            (None, Some(_)) if diagram.dependency => {}
            (None, Some(actual)) => out.push(
                Difference::new(
                    DifferenceKind::RelationshipMissingInUml,
                    policy.structural_omission,
                    location,
                )
                .summary(format!("{} exists in code but not in the diagram", actual.kind()))
                .values(MISSING, actual.kind().name())
                .tip(format!("Add the {} edge {location} to the diagram", actual.kind())),
            ),
            (Some(declared), Some(actual)) if declared != actual => {
                let summary = if declared < actual {
                    format!(
                        "Diagram shows {} but the code has the stronger {}",
                        declared.kind(),
                        actual.kind()
                    )
                } else {
                    format!(
                        "Diagram shows {} but the code only has {}",
                        declared.kind(),
                        actual.kind()
                    )
                };
                out.push(
                    mismatch(location, policy.ownership_strength_mismatch)
                        .summary(summary)
                        .values(declared.kind().name(), actual.kind().name())
                        .tip(format!("Change the diagram edge to {}", actual.kind())),
                );
            }
            _ => {}
        }
    }

    fn check_dependency(
        &self,
        location: &str,
        code: PairEdges,
        diagram: PairEdges,
        policy: &ModePolicy,
        out: &mut Vec<Difference>,
    ) {
        if !diagram.dependency {
            return;
        }
        if let Some(actual) = code.ownership {
            out.push(
                mismatch(location, policy.weaker_dependency)
                    .summary(format!(
                        "Diagram shows DEPENDENCY but the code has the stronger {}",
                        actual.kind()
                    ))
                    .values(RelationshipKind::Dependency.name(), actual.kind().name())
                    .tip(format!("Use {} instead of DEPENDENCY in the diagram", actual.kind())),
            );
        } else if !code.dependency {
            out.push(
                mismatch(location, Severity::Error)
                    .summary("Diagram shows DEPENDENCY but the code has no such edge")
                    .values(RelationshipKind::Dependency.name(), MISSING)
                    .tip(format!("Remove the DEPENDENCY edge {location} from the diagram")),
            );
        }
    }
}

impl Default for RelationshipComparator {
    fn default() -> Self {
        Self::new()
    }
}

impl Comparator for RelationshipComparator {
    fn compare(&self, code: &UmlModel, diagram: &UmlModel, policy: &ModePolicy) -> Vec<Difference> {
        let code_pairs = index_pairs(code);
        let diagram_pairs = index_pairs(diagram);
        let pairs: BTreeSet<(&str, &str)> = code_pairs
            .keys()
            .chain(diagram_pairs.keys())
            .copied()
            .collect();

        let mut differences = Vec::new();
        for (source, target) in pairs {
            let location = pair_location(source, target);
            let c = code_pairs.get(&(source, target)).copied().unwrap_or_default();
            let d = diagram_pairs
                .get(&(source, target))
                .copied()
                .unwrap_or_default();

            self.check_inheritance(&location, c, d, policy, &mut differences);
            self.check_ownership(&location, c, d, policy, &mut differences);
            self.check_dependency(&location, c, d, policy, &mut differences);
        }

        tracing::debug!(
            comparator = self.name(),
            code_pairs = code_pairs.len(),
            diagram_pairs = diagram_pairs.len(),
            differences = differences.len(),
            "relationships compared"
        );
        differences
    }

    fn name(&self) -> &str {
        "RelationshipComparator"
    }
}

fn mismatch(location: &str, severity: Severity) -> Difference {
    Difference::new(DifferenceKind::RelationshipMismatch, severity, location)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::ComparisonMode;
    use crate::model::{ModelBuilder, Provenance};

    fn model(provenance: Provenance, edges: &[(&str, &str, RelationshipKind)]) -> UmlModel {
        let mut builder = ModelBuilder::new(provenance);
        for (source, target, kind) in edges {
            builder.add_relationship(source, target, *kind);
        }
        builder.build()
    }

    fn compare(
        code: &[(&str, &str, RelationshipKind)],
        diagram: &[(&str, &str, RelationshipKind)],
        mode: ComparisonMode,
    ) -> Vec<Difference> {
        RelationshipComparator::new().compare(
            &model(Provenance::Code, code),
            &model(Provenance::Diagram, diagram),
            &mode.policy(),
        )
    }

    use RelationshipKind::{Aggregation, Association, Composition, Dependency, Generalization, Realization};

    #[test]
    fn test_ownership_under_claim() {
        let code = [("Order", "OrderLine", Composition)];
        let diagram = [("Order", "OrderLine", Association)];

        let strict = compare(&code, &diagram, ComparisonMode::Strict);
        assert_eq!(strict.len(), 1);
        assert_eq!(strict[0].kind, DifferenceKind::RelationshipMismatch);
        assert_eq!(strict[0].severity, Severity::Error);
        assert_eq!(strict[0].diagram_value, "ASSOCIATION");
        assert_eq!(strict[0].code_value, "COMPOSITION");
        assert_eq!(strict[0].location, "Order -> OrderLine");

        for mode in [ComparisonMode::Relaxed, ComparisonMode::Minimal] {
            let diffs = compare(&code, &diagram, mode);
            assert_eq!(diffs.len(), 1);
            assert_eq!(diffs[0].severity, Severity::Warning);
        }
    }

    #[test]
    fn test_ownership_over_claim_same_split() {
        let code = [("A", "B", Association)];
        let diagram = [("A", "B", Composition)];
        assert_eq!(compare(&code, &diagram, ComparisonMode::Strict)[0].severity, Severity::Error);
        assert_eq!(compare(&code, &diagram, ComparisonMode::Relaxed)[0].severity, Severity::Warning);
    }

    #[test]
    fn test_strongest_edge_absorbs_duplicates() {
        let code = [("A", "B", Association), ("A", "B", Composition)];
        let diagram = [("A", "B", Composition)];
        assert!(compare(&code, &diagram, ComparisonMode::Strict).is_empty());
    }

    #[test]
    fn test_diagram_only_ownership_is_error() {
        for mode in ComparisonMode::all() {
            let diffs = compare(&[], &[("A", "B", Aggregation)], *mode);
            assert_eq!(diffs.len(), 1);
            assert_eq!(diffs[0].kind, DifferenceKind::RelationshipMismatch);
            assert_eq!(diffs[0].severity, Severity::Error);
            assert_eq!(diffs[0].code_value, MISSING);
        }
    }

    #[test]
    fn test_diagram_ownership_over_code_dependency() {
        for mode in ComparisonMode::all() {
            let diffs = compare(&[("A", "B", Dependency)], &[("A", "B", Aggregation)], *mode);
            assert_eq!(diffs.len(), 1, "mode {mode}");
            assert_eq!(diffs[0].kind, DifferenceKind::RelationshipMismatch);
            assert_eq!(diffs[0].severity, Severity::Error);
            assert_eq!(diffs[0].diagram_value, "AGGREGATION");
            assert_eq!(diffs[0].code_value, "DEPENDENCY");
        }
    }

    #[test]
    fn test_code_only_ownership_suppressed_by_diagram_dependency() {
        let code = [("A", "B", Composition)];
        let diagram = [("A", "B", Dependency)];
        let diffs = compare(&code, &diagram, ComparisonMode::Relaxed);
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].summary, "Diagram shows DEPENDENCY but the code has the stronger COMPOSITION");
        assert_eq!(diffs[0].severity, Severity::Suggestion);

        let strict = compare(&code, &diagram, ComparisonMode::Strict);
        assert_eq!(strict.len(), 1);
        assert_eq!(strict[0].severity, Severity::Error);
    }

    #[test]
    fn test_code_only_ownership_is_omission() {
        let diffs = compare(&[("A", "B", Association)], &[], ComparisonMode::Minimal);
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].kind, DifferenceKind::RelationshipMissingInUml);
        assert_eq!(diffs[0].severity, Severity::Warning);
    }

    #[test]
    fn test_fabricated_dependency_is_error_everywhere() {
        for mode in ComparisonMode::all() {
            let diffs = compare(&[], &[("A", "B", Dependency)], *mode);
            assert_eq!(diffs.len(), 1);
            assert_eq!(diffs[0].severity, Severity::Error);
            assert_eq!(diffs[0].diagram_value, "DEPENDENCY");
        }
    }

    #[test]
    fn test_code_only_dependency_is_silent() {
        for mode in ComparisonMode::all() {
            assert!(compare(&[("A", "B", Dependency)], &[], *mode).is_empty());
        }
    }

    #[test]
    fn test_inheritance_asymmetry() {
        let code = [("Dog", "Animal", Generalization)];
        let relaxed = compare(&code, &[], ComparisonMode::Relaxed);
        assert_eq!(relaxed[0].kind, DifferenceKind::RelationshipMissingInUml);
        assert_eq!(relaxed[0].severity, Severity::Warning);
        assert_eq!(compare(&code, &[], ComparisonMode::Strict)[0].severity, Severity::Error);

        let diagram = [("Dog", "Pet", Realization)];
        for mode in ComparisonMode::all() {
            let diffs = compare(&[], &diagram, *mode);
            assert_eq!(diffs[0].kind, DifferenceKind::RelationshipMissingInCode);
            assert_eq!(diffs[0].severity, Severity::Error);
        }
    }

    #[test]
    fn test_generalization_and_realization_tracked_separately() {
        let code = [("A", "B", Generalization)];
        let diagram = [("A", "B", Realization)];
        let diffs = compare(&code, &diagram, ComparisonMode::Strict);
        assert_eq!(diffs.len(), 2);
        assert_eq!(diffs[0].code_value, "GENERALIZATION");
        assert_eq!(diffs[1].diagram_value, "REALIZATION");
    }

    #[test]
    fn test_self_loops_ignored() {
        let diffs = compare(&[("Node", "Node", Composition)], &[], ComparisonMode::Strict);
        assert!(diffs.is_empty());
    }

    #[test]
    fn test_pairs_in_sorted_order() {
        let code = [("Z", "A", Association), ("B", "C", Association)];
        let diffs = compare(&code, &[], ComparisonMode::Strict);
        assert_eq!(diffs[0].location, "B -> C");
        assert_eq!(diffs[1].location, "Z -> A");
    }
}
