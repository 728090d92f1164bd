//! Interchange front end.
//!
//! Reads a serialized model document in JSON or YAML:
//!
//! ```yaml
//! provenance: diagram
//! classes:
//!   - name: Order
//!     fields:
//!       - { name: id, type: int, visibility: "-" }
//!     methods:
//!       - { name: total, returnType: double, parameters: [], visibility: "+" }
//!       - { name: export }            # name-only declaration
//! relationships:
//!   - { source: Order, target: OrderLine, type: COMPOSITION }
//! ```
//!
//! Everything flows through [`ModelBuilder`], so unknown relationship
//! endpoints become placeholders and constructor-shaped methods are dropped.
//! Malformed entries are skipped with a notice rather than failing the parse.

use super::traits::{FormatConfidence, ModelParser, ParseError};
use crate::model::{
    ClassKind, Field, Method, ModelBuilder, Notice, NoticeKind, Provenance, RelationshipKind,
    StaticFlag, UmlModel, Visibility,
};
use serde::Deserialize;

/// Serialization format of a model document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// JSON if the first non-blank character is `{`, YAML otherwise.
    #[must_use]
    pub fn detect(content: &str) -> Self {
        if content.trim_start().starts_with('{') {
            Self::Json
        } else {
            Self::Yaml
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ModelDocument {
    provenance: Option<Provenance>,
    classes: Vec<ClassEntry>,
    relationships: Vec<RelationshipEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ClassEntry {
    name: Option<String>,
    kind: Option<String>,
    #[serde(rename = "abstract")]
    is_abstract: bool,
    literals: Vec<String>,
    extends: Option<String>,
    implements: Vec<String>,
    fields: Vec<FieldEntry>,
    methods: Vec<MethodEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct FieldEntry {
    name: Option<String>,
    #[serde(rename = "type")]
    declared_type: Option<String>,
    visibility: Option<String>,
    #[serde(rename = "static")]
    is_static: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct MethodEntry {
    name: Option<String>,
    return_type: Option<String>,
    parameters: Option<Vec<String>>,
    visibility: Option<String>,
    #[serde(rename = "static")]
    is_static: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RelationshipEntry {
    source: Option<String>,
    target: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

/// Parser for interchange model documents.
#[derive(Debug, Clone, Default)]
pub struct InterchangeParser {
    provenance: Option<Provenance>,
}

impl InterchangeParser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Force the provenance, ignoring what the document says.
    #[must_use]
    pub fn with_provenance(mut self, provenance: Provenance) -> Self {
        self.provenance = Some(provenance);
        self
    }

    fn decode(content: &str) -> Result<ModelDocument, ParseError> {
        if content.trim().is_empty() {
            return Ok(ModelDocument::default());
        }
        match DocumentFormat::detect(content) {
            DocumentFormat::Json => Ok(serde_json::from_str(content)?),
            DocumentFormat::Yaml => Ok(serde_yaml::from_str(content)?),
        }
    }

    fn build(&self, document: ModelDocument) -> Result<UmlModel, ParseError> {
        let provenance = self
            .provenance
            .or(document.provenance)
            .ok_or_else(|| ParseError::MissingField("provenance".to_string()))?;
        let mut builder = ModelBuilder::new(provenance);

        // Declare everything first so forward references land on real classes
        for entry in &document.classes {
            let Some(name) = entry.name.as_deref().filter(|n| !n.trim().is_empty()) else {
                builder.add_notice(skipped("<unnamed>", "class entry without a name skipped"));
                continue;
            };
            let kind = match entry.kind.as_deref() {
                None => ClassKind::Class,
                Some(raw) => parse_class_kind(raw).unwrap_or_else(|| {
                    builder.add_notice(skipped(name, &format!("unknown class kind '{raw}' read as class")));
                    ClassKind::Class
                }),
            };
            if let Some(class) = builder.declare_class(name, kind) {
                class.is_abstract |= entry.is_abstract;
            }
        }

        for entry in &document.classes {
            let Some(name) = entry.name.as_deref().filter(|n| !n.trim().is_empty()) else {
                continue;
            };
            for literal in &entry.literals {
                builder.add_literal(name, literal);
            }
            for field in &entry.fields {
                add_field(&mut builder, name, field);
            }
            for method in &entry.methods {
                add_method(&mut builder, name, method);
            }
            if let Some(parent) = entry.extends.as_deref() {
                builder.add_relationship(name, parent, RelationshipKind::Generalization);
            }
            for interface in &entry.implements {
                builder.add_relationship(name, interface, RelationshipKind::Realization);
            }
        }

        for edge in &document.relationships {
            let source = edge.source.as_deref().unwrap_or_default();
            let target = edge.target.as_deref().unwrap_or_default();
            match edge.kind.as_deref().and_then(RelationshipKind::parse) {
                Some(kind) => {
                    builder.add_relationship(source, target, kind);
                }
                None => builder.add_notice(skipped(
                    &format!("{source} -> {target}"),
                    &format!(
                        "relationship with unknown type '{}' skipped",
                        edge.kind.as_deref().unwrap_or_default()
                    ),
                )),
            }
        }

        Ok(builder.build())
    }
}

impl ModelParser for InterchangeParser {
    fn parse_str(&self, content: &str) -> Result<UmlModel, ParseError> {
        let document = Self::decode(content)?;
        let model = self.build(document)?;
        tracing::debug!(
            format = DocumentFormat::detect(content).name(),
            provenance = %model.provenance,
            classes = model.class_count(),
            relationships = model.relationships.len(),
            "model document parsed"
        );
        Ok(model)
    }

    fn format_name(&self) -> &str {
        "interchange"
    }

    fn detect(&self, content: &str) -> FormatConfidence {
        let trimmed = content.trim_start();
        if trimmed.is_empty() {
            return FormatConfidence::LOW;
        }
        let has_marker = trimmed.contains("\"classes\"")
            || trimmed.contains("classes:")
            || trimmed.contains("\"relationships\"")
            || trimmed.contains("relationships:");
        if has_marker {
            FormatConfidence::HIGH
        } else if trimmed.starts_with('{') {
            FormatConfidence::LOW
        } else {
            FormatConfidence::NONE
        }
    }
}

fn skipped(subject: &str, message: &str) -> Notice {
    Notice {
        kind: NoticeKind::SkippedEntry,
        subject: subject.to_string(),
        message: message.to_string(),
    }
}

fn parse_class_kind(raw: &str) -> Option<ClassKind> {
    match raw.trim().to_lowercase().as_str() {
        "class" | "abstract" | "abstract class" => Some(ClassKind::Class),
        "interface" => Some(ClassKind::Interface),
        "enum" => Some(ClassKind::Enum),
        _ => None,
    }
}

/// Parse a visibility written as a symbol or a keyword.
///
/// Blank means omitted. Anything else unrecognized is also read as omitted,
/// with a notice.
fn parse_visibility(
    builder: &mut ModelBuilder,
    owner: &str,
    raw: Option<&str>,
) -> Option<Visibility> {
    let raw = raw.map(str::trim).filter(|r| !r.is_empty())?;
    let parsed = Visibility::from_symbol(raw).or_else(|| match raw.to_lowercase().as_str() {
        "public" => Some(Visibility::Public),
        "protected" => Some(Visibility::Protected),
        "package" | "package-private" => Some(Visibility::Package),
        "private" => Some(Visibility::Private),
        _ => None,
    });
    if parsed.is_none() {
        builder.add_notice(Notice {
            kind: NoticeKind::UnknownVisibility,
            subject: owner.to_string(),
            message: format!("visibility '{raw}' on '{owner}' is not recognized; treated as omitted"),
        });
    }
    parsed
}

/// Code members are either static or not; only a diagram may omit the flag.
fn static_flag(builder: &ModelBuilder, raw: Option<bool>) -> StaticFlag {
    match (builder.provenance(), raw) {
        (Provenance::Code, None) => StaticFlag::NonStatic,
        (_, raw) => StaticFlag::from_option(raw),
    }
}

fn add_field(builder: &mut ModelBuilder, class: &str, entry: &FieldEntry) {
    let Some(name) = entry.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) else {
        builder.add_notice(skipped(class, "field without a name skipped"));
        return;
    };
    let owner = format!("{class}.{name}");
    let field = Field {
        name: name.to_string(),
        declared_type: entry
            .declared_type
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string),
        visibility: parse_visibility(builder, &owner, entry.visibility.as_deref()),
        is_static: static_flag(builder, entry.is_static),
    };
    builder.add_field(class, field);
}

fn add_method(builder: &mut ModelBuilder, class: &str, entry: &MethodEntry) {
    let Some(name) = entry.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) else {
        builder.add_notice(skipped(class, "method without a name skipped"));
        return;
    };
    let owner = format!("{class}#{name}");
    let method = Method {
        name: name.to_string(),
        return_type: entry
            .return_type
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string),
        parameters: entry
            .parameters
            .as_ref()
            .map(|params| params.iter().map(|p| parameter_type(p)).collect()),
        visibility: parse_visibility(builder, &owner, entry.visibility.as_deref()),
        is_static: static_flag(builder, entry.is_static),
    };
    builder.add_method(class, method);
}

/// Reduce a parameter declaration to its type.
///
/// Accepts a bare type (`List<String>`), `name: Type` or `Type name`.
/// Leading `final` is dropped.
pub fn parameter_type(raw: &str) -> String {
    let raw = raw.trim();

    if let Some(idx) = single_colon(raw) {
        return raw[idx + 1..].trim().to_string();
    }

    let raw = raw.strip_prefix("final ").map_or(raw, str::trim_start);
    match last_top_level_space(raw) {
        Some(idx) => {
            let (ty, name) = (raw[..idx].trim_end(), raw[idx + 1..].trim());
            if is_identifier(name) && !ty.is_empty() && !ty.ends_with(',') {
                ty.to_string()
            } else {
                raw.to_string()
            }
        }
        None => raw.to_string(),
    }
}

/// Byte index of a `:` that is not part of `::`.
fn single_colon(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    (0..bytes.len()).find(|&i| {
        bytes[i] == b':'
            && (i == 0 || bytes[i - 1] != b':')
            && bytes.get(i + 1).map_or(true, |&b| b != b':')
    })
}

fn last_top_level_space(s: &str) -> Option<usize> {
    let mut depth = 0i32;
    let mut found = None;
    for (i, c) in s.char_indices() {
        match c {
            '<' | '[' => depth += 1,
            '>' | ']' => depth -= 1,
            c if c.is_whitespace() && depth == 0 => found = Some(i),
            _ => {}
        }
    }
    found
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}
