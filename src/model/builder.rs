//! Incremental model construction.
//!
//! Front ends feed declarations and references in whatever order they meet
//! them. The builder keeps the model invariants:
//!
//! - class names are non-empty and unique
//! - a name referenced before its declaration becomes a placeholder with an
//!   [`UndeclaredClass`](super::NoticeKind::UndeclaredClass) notice
//! - declaring a placeholder promotes it in place and withdraws the notice
//! - constructor-shaped methods never reach the method list

use super::{
    Class, ClassKind, DeclarationConfidence, Field, Method, Notice, NoticeKind, Provenance,
    Relationship, RelationshipKind, UmlModel,
};

/// Builder for [`UmlModel`].
#[derive(Debug)]
#[must_use]
pub struct ModelBuilder {
    model: UmlModel,
}

impl ModelBuilder {
    pub fn new(provenance: Provenance) -> Self {
        Self {
            model: UmlModel::new(provenance),
        }
    }

    /// Provenance of the model under construction.
    #[must_use]
    pub const fn provenance(&self) -> Provenance {
        self.model.provenance
    }

    /// Declare a class, promoting an existing placeholder of the same name.
    ///
    /// Returns `None` for a blank name. Re-declaring an official class keeps
    /// the first declaration and records a notice.
    pub fn declare_class(&mut self, name: &str, kind: ClassKind) -> Option<&mut Class> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let mut promoted = false;
        let mut duplicate = false;
        match self.model.classes.get_mut(name) {
            Some(existing) if existing.is_placeholder() => {
                existing.confidence = DeclarationConfidence::Official;
                existing.kind = kind;
                promoted = true;
            }
            Some(_) => duplicate = true,
            None => {
                self.model
                    .classes
                    .insert(name.to_string(), Class::new(name, kind));
            }
        }

        if promoted {
            self.model
                .notices
                .retain(|n| !(n.kind == NoticeKind::UndeclaredClass && n.subject == name));
            tracing::trace!(class = name, "placeholder promoted to official");
        }
        if duplicate {
            self.model.notices.push(Notice {
                kind: NoticeKind::DuplicateDeclaration,
                subject: name.to_string(),
                message: format!("class '{name}' is declared more than once"),
            });
        }

        self.model.classes.get_mut(name)
    }

    /// Make sure a class name exists, creating a placeholder if needed.
    ///
    /// Returns `false` for a blank name.
    pub fn reference_class(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        if !self.model.classes.contains_key(name) {
            self.model
                .classes
                .insert(name.to_string(), Class::placeholder(name));
            self.model.notices.push(Notice::undeclared_class(name));
        }
        true
    }

    /// Attach a field to a class. Blank names and unknown classes are skipped.
    pub fn add_field(&mut self, class_name: &str, field: Field) -> bool {
        if field.name.trim().is_empty() {
            return false;
        }
        match self.model.classes.get_mut(class_name.trim()) {
            Some(class) => {
                class.fields.push(field);
                true
            }
            None => {
                tracing::debug!(class = class_name, field = %field.name, "field for unknown class skipped");
                false
            }
        }
    }

    /// Attach a method to a class.
    ///
    /// Constructor-shaped methods, blank names and unknown classes are skipped.
    pub fn add_method(&mut self, class_name: &str, method: Method) -> bool {
        if method.name.trim().is_empty() {
            return false;
        }
        match self.model.classes.get_mut(class_name.trim()) {
            Some(class) if class.is_constructor_name(&method.name) => false,
            Some(class) => {
                class.methods.push(method);
                true
            }
            None => {
                tracing::debug!(class = class_name, method = %method.name, "method for unknown class skipped");
                false
            }
        }
    }

    /// Record an enum literal on an existing class.
    pub fn add_literal(&mut self, class_name: &str, literal: &str) -> bool {
        let literal = literal.trim();
        if literal.is_empty() {
            return false;
        }
        match self.model.classes.get_mut(class_name.trim()) {
            Some(class) => {
                class.literals.push(literal.to_string());
                true
            }
            None => false,
        }
    }

    /// Record a directed edge, referencing both endpoints.
    ///
    /// Edges with a blank endpoint are skipped. Self-loops are kept in the
    /// model; comparators ignore them.
    pub fn add_relationship(&mut self, source: &str, target: &str, kind: RelationshipKind) -> bool {
        let (source, target) = (source.trim(), target.trim());
        if source.is_empty() || target.is_empty() {
            self.add_notice(Notice {
                kind: NoticeKind::SkippedEntry,
                subject: format!("{source} -> {target}"),
                message: format!("{kind} relationship with a blank endpoint skipped"),
            });
            return false;
        }
        self.reference_class(source);
        self.reference_class(target);
        self.model
            .relationships
            .push(Relationship::new(source, target, kind));
        true
    }

    /// Record an advisory notice.
    pub fn add_notice(&mut self, notice: Notice) {
        self.model.notices.push(notice);
    }

    /// Read access to the partial model.
    #[must_use]
    pub const fn model(&self) -> &UmlModel {
        &self.model
    }

    /// Finish construction and compute the content hash.
    #[must_use]
    pub fn build(mut self) -> UmlModel {
        self.model.calculate_content_hash();
        self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_creates_placeholder_with_notice() {
        let mut builder = ModelBuilder::new(Provenance::Diagram);
        assert!(builder.add_relationship("Order", "Customer", RelationshipKind::Association));

        let model = builder.build();
        assert_eq!(model.placeholders().count(), 2);
        assert_eq!(
            model
                .notices
                .iter()
                .filter(|n| n.kind == NoticeKind::UndeclaredClass)
                .count(),
            2
        );
    }

    #[test]
    fn test_declaration_promotes_placeholder() {
        let mut builder = ModelBuilder::new(Provenance::Code);
        builder.add_relationship("Order", "Customer", RelationshipKind::Association);
        builder.declare_class("Customer", ClassKind::Interface);

        let model = builder.build();
        let customer = model.class("Customer").expect("customer exists");
        assert!(!customer.is_placeholder());
        assert_eq!(customer.kind, ClassKind::Interface);
        assert!(model.notices.iter().all(|n| n.subject != "Customer"));
        assert!(model.notices.iter().any(|n| n.subject == "Order"));
        // Index position is where the name was first referenced
        assert_eq!(model.classes.get_index_of("Customer"), Some(1));
    }

    #[test]
    fn test_constructor_dropped() {
        let mut builder = ModelBuilder::new(Provenance::Code);
        builder.declare_class("Order", ClassKind::Class);
        assert!(!builder.add_method("Order", Method::new("Order", "void")));
        assert!(builder.add_method("Order", Method::new("total", "double")));

        let model = builder.build();
        let order = model.class("Order").expect("order exists");
        assert_eq!(order.methods.len(), 1);
        assert_eq!(order.methods[0].name, "total");
    }

    #[test]
    fn test_blank_inputs_skipped() {
        let mut builder = ModelBuilder::new(Provenance::Code);
        assert!(builder.declare_class("   ", ClassKind::Class).is_none());
        assert!(!builder.add_relationship("", "B", RelationshipKind::Dependency));
        assert!(!builder.add_field("Nowhere", Field::new("x", "int")));

        let model = builder.build();
        assert_eq!(model.class_count(), 0);
        assert!(model.relationships.is_empty());
        assert!(model
            .notices
            .iter()
            .any(|n| n.kind == NoticeKind::SkippedEntry));
    }

    #[test]
    fn test_duplicate_declaration_noticed() {
        let mut builder = ModelBuilder::new(Provenance::Diagram);
        builder.declare_class("Order", ClassKind::Class);
        builder.declare_class("Order", ClassKind::Class);
        let model = builder.build();
        assert_eq!(model.class_count(), 1);
        assert!(model
            .notices
            .iter()
            .any(|n| n.kind == NoticeKind::DuplicateDeclaration));
    }

    #[test]
    fn test_self_loop_kept_in_model() {
        let mut builder = ModelBuilder::new(Provenance::Code);
        builder.declare_class("Node", ClassKind::Class);
        assert!(builder.add_relationship("Node", "Node", RelationshipKind::Association));
        let model = builder.build();
        assert_eq!(model.relationships.len(), 1);
        assert_eq!(model.comparable_relationships().count(), 0);
    }
}
