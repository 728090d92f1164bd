//! Comparison orchestrator.

use super::comparators::{
    AttributeComparator, ClassComparator, MethodComparator, RelationshipComparator,
};
use super::traits::{Comparator, MemberComparator};
use super::{ComparisonMode, ComparisonResult, ModePolicy};
use crate::model::{Provenance, UmlModel};

/// Consistency engine comparing a code model against a diagram model.
///
/// The engine holds no state between calls and never mutates its inputs, so
/// one instance can be shared across threads and reused with any models.
#[derive(Debug, Clone)]
pub struct ConsistencyEngine {
    mode: ComparisonMode,
    hash_shortcut: bool,
}

impl ConsistencyEngine {
    /// Create an engine in strict mode
    pub fn new() -> Self {
        Self {
            mode: ComparisonMode::Strict,
            hash_shortcut: true,
        }
    }

    /// Set the comparison mode
    #[must_use]
    pub fn with_mode(mut self, mode: ComparisonMode) -> Self {
        self.mode = mode;
        self
    }

    /// Enable or disable the identical-content shortcut
    #[must_use]
    pub fn with_hash_shortcut(mut self, enabled: bool) -> Self {
        self.hash_shortcut = enabled;
        self
    }

    #[must_use]
    pub fn mode(&self) -> ComparisonMode {
        self.mode
    }

    /// Compare using the configured mode.
    pub fn compare(&self, code: &UmlModel, diagram: &UmlModel) -> ComparisonResult {
        self.compare_with_mode(code, diagram, self.mode)
    }

    /// Compare under an explicit mode.
    ///
    /// Output order: classes, then per shared class (sorted by name) its
    /// fields followed by its methods, then relationships by sorted pair.
    pub fn compare_with_mode(
        &self,
        code: &UmlModel,
        diagram: &UmlModel,
        mode: ComparisonMode,
    ) -> ComparisonResult {
        if code.provenance != Provenance::Code || diagram.provenance != Provenance::Diagram {
            tracing::warn!(
                code = %code.provenance,
                diagram = %diagram.provenance,
                "models passed with unexpected provenance; check argument order"
            );
        }

        // Quick check: identical content means nothing to report. Hashed from
        // the inputs; the cached field may predate edits to a public model.
        if self.hash_shortcut && code.compute_content_hash() == diagram.compute_content_hash() {
            tracing::debug!(%mode, "models have identical content");
            return ComparisonResult::new(mode);
        }

        let policy = ModePolicy::for_mode(mode);
        let mut differences = ClassComparator::new().compare(code, diagram, &policy);

        let shared = ClassComparator::shared_classes(code, diagram);
        let members: [&dyn MemberComparator; 2] = [&AttributeComparator, &MethodComparator];
        for name in &shared {
            let (Some(code_class), Some(diagram_class)) =
                (code.official_class(name), diagram.official_class(name))
            else {
                continue;
            };
            for comparator in members {
                differences.extend(comparator.compare_class(code_class, diagram_class, &policy));
            }
        }

        differences.extend(RelationshipComparator::new().compare(code, diagram, &policy));

        let result = ComparisonResult::from_differences(mode, differences);
        tracing::debug!(
            %mode,
            shared_classes = shared.len(),
            differences = result.summary.total,
            errors = result.summary.errors,
            "comparison finished"
        );
        result
    }
}

impl Default for ConsistencyEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Compare two models under `mode` with a default engine.
pub fn compare_models(code: &UmlModel, diagram: &UmlModel, mode: ComparisonMode) -> ComparisonResult {
    ConsistencyEngine::new().compare_with_mode(code, diagram, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{DifferenceKind, Severity};
    use crate::model::{ClassKind, Field, Method, ModelBuilder, RelationshipKind, Visibility};

    fn order_model(provenance: Provenance, total_return: &str) -> UmlModel {
        let mut builder = ModelBuilder::new(provenance);
        builder.declare_class("Order", ClassKind::Class);
        builder.add_field("Order", Field::new("id", "int").with_visibility(Visibility::Public));
        builder.add_method(
            "Order",
            Method::new("total", total_return).with_visibility(Visibility::Public),
        );
        builder.build()
    }

    #[test]
    fn test_identical_models_empty() {
        let code = order_model(Provenance::Code, "double");
        let diagram = order_model(Provenance::Diagram, "double");
        for mode in ComparisonMode::all() {
            assert!(compare_models(&code, &diagram, *mode).is_empty());
        }
    }

    #[test]
    fn test_single_return_mismatch() {
        let code = order_model(Provenance::Code, "double");
        let diagram = order_model(Provenance::Diagram, "String");
        let result = ConsistencyEngine::new().compare(&code, &diagram);
        assert_eq!(result.differences.len(), 1);
        let diff = &result.differences[0];
        assert_eq!(diff.kind, DifferenceKind::MethodMismatch);
        assert_eq!(diff.severity, Severity::Error);
        assert_eq!(diff.diagram_value, "String");
        assert_eq!(diff.code_value, "double");
    }

    #[test]
    fn test_output_order_classes_members_relationships() {
        let mut code = ModelBuilder::new(Provenance::Code);
        code.declare_class("Beta", ClassKind::Class);
        code.declare_class("Alpha", ClassKind::Class);
        code.declare_class("Extra", ClassKind::Class);
        code.add_field("Beta", Field::new("b", "int").with_visibility(Visibility::Private));
        code.add_method("Alpha", Method::new("run", "void").with_visibility(Visibility::Public));
        code.add_relationship("Alpha", "Beta", RelationshipKind::Association);
        let code = code.build();

        let mut diagram = ModelBuilder::new(Provenance::Diagram);
        diagram.declare_class("Beta", ClassKind::Class);
        diagram.declare_class("Alpha", ClassKind::Class);
        let diagram = diagram.build();

        let result = ConsistencyEngine::new().compare(&code, &diagram);
        let locations: Vec<&str> = result.differences.iter().map(|d| d.location.as_str()).collect();
        assert_eq!(
            locations,
            vec!["Extra", "Alpha#run()", "Beta.attr:b", "Alpha -> Beta"]
        );
    }

    #[test]
    fn test_inputs_not_mutated_and_reusable() {
        let code = order_model(Provenance::Code, "double");
        let diagram = order_model(Provenance::Diagram, "String");
        let before = code.content_hash;
        let engine = ConsistencyEngine::new();
        let strict = engine.compare_with_mode(&code, &diagram, ComparisonMode::Strict);
        let relaxed = engine.compare_with_mode(&code, &diagram, ComparisonMode::Relaxed);
        assert_eq!(strict.mode, ComparisonMode::Strict);
        assert_eq!(relaxed.mode, ComparisonMode::Relaxed);
        assert_eq!(code.content_hash, before);
        assert_eq!(
            engine.compare_with_mode(&code, &diagram, ComparisonMode::Strict).differences,
            strict.differences
        );
    }

    #[test]
    fn test_model_edited_after_build_is_compared() {
        let code = order_model(Provenance::Code, "double");
        let mut diagram = order_model(Provenance::Diagram, "double");
        assert_eq!(code.content_hash, diagram.content_hash);

        // Cached hash now lags behind the diagram's members
        diagram.classes["Order"]
            .fields
            .push(Field::new("ghost", "int").with_visibility(Visibility::Private));

        let result = compare_models(&code, &diagram, ComparisonMode::Strict);
        assert_eq!(result.differences.len(), 1);
        assert_eq!(result.differences[0].kind, DifferenceKind::AttributeMissingInCode);
        assert_eq!(result.differences[0].location, "Order.attr:ghost");
    }

    #[test]
    fn test_shortcut_can_be_disabled() {
        let code = order_model(Provenance::Code, "double");
        let diagram = order_model(Provenance::Diagram, "double");
        let result = ConsistencyEngine::new()
            .with_hash_shortcut(false)
            .compare(&code, &diagram);
        // Diagram and code agree on everything that was written
        assert!(result.is_empty());
    }
}
