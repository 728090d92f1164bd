//! PlantUML class-diagram renderer.

use super::DiagramGenerator;
use crate::model::{Class, ClassKind, Field, Method, RelationshipKind, StaticFlag, UmlModel};
use crate::reports::ReportError;
use std::fmt::Write;

/// PlantUML renderer.
#[derive(Debug, Clone, Default)]
pub struct PlantUmlGenerator {
    title: Option<String>,
    hide_empty_members: bool,
}

impl PlantUmlGenerator {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            title: None,
            hide_empty_members: false,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Emit `hide empty members` so member-less classes render as plain boxes.
    #[must_use]
    pub const fn hide_empty_members(mut self, hide: bool) -> Self {
        self.hide_empty_members = hide;
        self
    }

    fn write_class(out: &mut String, class: &Class) -> std::fmt::Result {
        let keyword = match (class.kind, class.is_abstract) {
            (ClassKind::Interface, _) => "interface",
            (ClassKind::Enum, _) => "enum",
            (ClassKind::Class, true) => "abstract class",
            (ClassKind::Class, false) => "class",
        };
        let name = quote_name(&class.name);

        if class.literals.is_empty() && class.fields.is_empty() && class.methods.is_empty() {
            return writeln!(out, "{keyword} {name}");
        }

        writeln!(out, "{keyword} {name} {{")?;
        for literal in &class.literals {
            writeln!(out, "  {literal}")?;
        }
        for field in &class.fields {
            writeln!(out, "  {}", render_field(field))?;
        }
        for method in &class.methods {
            writeln!(out, "  {}", render_method(method))?;
        }
        writeln!(out, "}}")
    }
}

/// Quote names PlantUML would not read as a bare identifier.
fn quote_name(name: &str) -> String {
    let bare = name
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '_' | '.' | '$' | '<' | '>' | ','));
    if bare && !name.is_empty() {
        name.to_string()
    } else {
        format!("\"{}\"", name.replace('"', "'"))
    }
}

fn member_prefix(visibility: Option<crate::model::Visibility>, is_static: StaticFlag) -> String {
    let mut prefix = String::new();
    if is_static == StaticFlag::Static {
        prefix.push_str("{static} ");
    }
    if let Some(vis) = visibility {
        prefix.push_str(vis.symbol());
    }
    prefix
}

fn render_field(field: &Field) -> String {
    let mut line = member_prefix(field.visibility, field.is_static);
    line.push_str(&field.name);
    if let Some(ty) = field.declared_type.as_deref().filter(|t| !t.trim().is_empty()) {
        line.push_str(" : ");
        line.push_str(ty);
    }
    line
}

fn render_method(method: &Method) -> String {
    let mut line = member_prefix(method.visibility, method.is_static);
    line.push_str(&method.name);
    line.push('(');
    line.push_str(&method.parameter_types().join(", "));
    line.push(')');
    if let Some(ret) = method.return_type.as_deref().filter(|t| !t.trim().is_empty()) {
        line.push_str(" : ");
        line.push_str(ret);
    }
    line
}

/// Arrow text with the endpoints in PlantUML reading order.
fn render_edge(source: &str, target: &str, kind: RelationshipKind) -> String {
    let (s, t) = (quote_name(source), quote_name(target));
    match kind {
        RelationshipKind::Generalization => format!("{t} <|-- {s}"),
        RelationshipKind::Realization => format!("{t} <|.. {s}"),
        RelationshipKind::Association => format!("{s} --> {t}"),
        RelationshipKind::Aggregation => format!("{s} o-- {t}"),
        RelationshipKind::Composition => format!("{s} *-- {t}"),
        RelationshipKind::Dependency => format!("{s} ..> {t}"),
    }
}

impl DiagramGenerator for PlantUmlGenerator {
    fn generate(&self, model: &UmlModel) -> Result<String, ReportError> {
        let mut out = String::new();
        writeln!(out, "@startuml")?;
        if let Some(title) = &self.title {
            writeln!(out, "title {title}")?;
        }
        if self.hide_empty_members {
            writeln!(out, "hide empty members")?;
        }

        let mut declared = 0usize;
        for class in model.official_classes() {
            if declared > 0 {
                writeln!(out)?;
            }
            Self::write_class(&mut out, class)?;
            declared += 1;
        }

        let edges: Vec<_> = model
            .relationships
            .iter()
            .filter(|r| r.has_endpoints())
            .collect();
        if !edges.is_empty() {
            writeln!(out)?;
        }
        for rel in edges {
            writeln!(out, "{}", render_edge(&rel.source, &rel.target, rel.kind))?;
        }

        writeln!(out, "@enduml")?;
        tracing::debug!(
            classes = declared,
            relationships = model.relationships.len(),
            "rendered PlantUML diagram"
        );
        Ok(out)
    }

    fn dialect(&self) -> &'static str {
        "plantuml"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ModelBuilder, Provenance, Visibility};

    fn order_model() -> UmlModel {
        let mut b = ModelBuilder::new(Provenance::Code);
        b.declare_class("Order", ClassKind::Class);
        b.add_field("Order", Field::new("id", "int").with_visibility(Visibility::Private));
        b.add_field(
            "Order",
            Field::new("count", "int")
                .with_visibility(Visibility::Public)
                .with_static(true),
        );
        b.add_method(
            "Order",
            Method::new("total", "double")
                .with_parameters(["int"])
                .with_visibility(Visibility::Public),
        );
        if let Some(shape) = b.declare_class("Shape", ClassKind::Class) {
            shape.is_abstract = true;
        }
        b.declare_class("Status", ClassKind::Enum);
        b.add_literal("Status", "OPEN");
        b.declare_class("Exportable", ClassKind::Interface);
        b.add_relationship("Order", "OrderLine", RelationshipKind::Composition);
        b.add_relationship("Order", "Exportable", RelationshipKind::Realization);
        b.add_relationship("Order", "Shape", RelationshipKind::Generalization);
        b.build()
    }

    #[test]
    fn test_document_frame() {
        let uml = PlantUmlGenerator::new()
            .with_title("Orders")
            .generate(&order_model())
            .expect("render");
        assert!(uml.starts_with("@startuml\ntitle Orders\n"));
        assert!(uml.ends_with("@enduml\n"));
    }

    #[test]
    fn test_class_bodies() {
        let uml = PlantUmlGenerator::new().generate(&order_model()).expect("render");
        assert!(uml.contains("class Order {\n  -id : int\n  {static} +count : int\n  +total(int) : double\n}"));
        assert!(uml.contains("abstract class Shape\n"));
        assert!(uml.contains("enum Status {\n  OPEN\n}"));
        assert!(uml.contains("interface Exportable\n"));
    }

    #[test]
    fn test_placeholders_only_appear_as_endpoints() {
        let uml = PlantUmlGenerator::new().generate(&order_model()).expect("render");
        assert!(!uml.contains("class OrderLine"));
        assert!(uml.contains("Order *-- OrderLine"));
    }

    #[test]
    fn test_edge_arrows() {
        let uml = PlantUmlGenerator::new().generate(&order_model()).expect("render");
        assert!(uml.contains("Exportable <|.. Order"));
        assert!(uml.contains("Shape <|-- Order"));
        assert_eq!(
            render_edge("A", "B", RelationshipKind::Aggregation),
            "A o-- B"
        );
        assert_eq!(render_edge("A", "B", RelationshipKind::Dependency), "A ..> B");
        assert_eq!(render_edge("A", "B", RelationshipKind::Association), "A --> B");
    }

    #[test]
    fn test_name_quoting() {
        assert_eq!(quote_name("Map<K,V>"), "Map<K,V>");
        assert_eq!(quote_name("Order Line"), "\"Order Line\"");
    }

    #[test]
    fn test_empty_model() {
        let model = ModelBuilder::new(Provenance::Code).build();
        let uml = PlantUmlGenerator::new()
            .hide_empty_members(true)
            .generate(&model)
            .expect("render");
        assert_eq!(uml, "@startuml\nhide empty members\n@enduml\n");
    }
}
