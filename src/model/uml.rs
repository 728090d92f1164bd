//! The shared model both sides are normalized into.

use super::{Class, Relationship};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use xxhash_rust::xxh3::xxh3_64;

/// Where a model came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Derived from source code.
    Code,
    /// Derived from a class-diagram script.
    Diagram,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code => write!(f, "code"),
            Self::Diagram => write!(f, "diagram"),
        }
    }
}

/// Category of an advisory notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// A class was referenced but never declared.
    UndeclaredClass,
    /// A class was declared more than once; members were merged.
    DuplicateDeclaration,
    /// A member carried a visibility symbol that is not `+ # ~ -`.
    UnknownVisibility,
    /// A relationship or member entry was dropped as malformed.
    SkippedEntry,
}

/// Advisory notice accumulated while building a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    /// Name of the class (or entry) the notice is about.
    pub subject: String,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn undeclared_class(name: &str) -> Self {
        Self {
            kind: NoticeKind::UndeclaredClass,
            subject: name.to_string(),
            message: format!("class '{name}' is referenced but never declared"),
        }
    }
}

/// A complete model of classes and relationships.
///
/// Built once by a front end (see [`ModelBuilder`](super::ModelBuilder)) and
/// treated as immutable input by the comparison engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UmlModel {
    pub provenance: Provenance,
    /// Classes keyed by name, in declaration order.
    pub classes: IndexMap<String, Class>,
    pub relationships: Vec<Relationship>,
    pub notices: Vec<Notice>,
    /// Hash over classes and relationships as of the last
    /// [`calculate_content_hash`](Self::calculate_content_hash) call
    #[serde(skip)]
    pub content_hash: u64,
}

impl UmlModel {
    /// Create an empty model
    #[must_use]
    pub fn new(provenance: Provenance) -> Self {
        Self {
            provenance,
            classes: IndexMap::new(),
            relationships: Vec::new(),
            notices: Vec::new(),
            content_hash: 0,
        }
    }

    /// Get a class by name
    #[must_use]
    pub fn class(&self, name: &str) -> Option<&Class> {
        self.classes.get(name)
    }

    /// Get a class only if it was officially declared
    #[must_use]
    pub fn official_class(&self, name: &str) -> Option<&Class> {
        self.classes.get(name).filter(|c| !c.is_placeholder())
    }

    #[must_use]
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Iterate officially declared classes in declaration order
    pub fn official_classes(&self) -> impl Iterator<Item = &Class> {
        self.classes.values().filter(|c| !c.is_placeholder())
    }

    /// Iterate placeholder classes in the order they were first referenced
    pub fn placeholders(&self) -> impl Iterator<Item = &Class> {
        self.classes.values().filter(|c| c.is_placeholder())
    }

    /// Relationships whose endpoints are both non-blank and distinct
    pub fn comparable_relationships(&self) -> impl Iterator<Item = &Relationship> {
        self.relationships.iter().filter(|r| r.is_comparable())
    }

    /// Calculate and update the content hash.
    pub fn calculate_content_hash(&mut self) {
        self.content_hash = self.compute_content_hash();
    }

    /// Hash the current classes and relationships.
    ///
    /// Provenance and notices do not contribute, so a code model and a
    /// diagram model describing the same structure hash identically.
    #[must_use]
    pub fn compute_content_hash(&self) -> u64 {
        let mut hasher_input = Vec::new();

        for class in self.classes.values() {
            if let Ok(class_json) = serde_json::to_vec(class) {
                hasher_input.extend(class_json);
            }
        }

        for edge in &self.relationships {
            hasher_input.extend(edge.source.as_bytes());
            hasher_input.push(0);
            hasher_input.extend(edge.target.as_bytes());
            hasher_input.push(0);
            hasher_input.extend(edge.kind.name().as_bytes());
        }

        xxh3_64(&hasher_input)
    }

    /// Log a single summary line if any notices were recorded.
    pub fn log_notice_summary(&self) {
        if self.notices.is_empty() {
            return;
        }
        let placeholders = self.placeholders().count();
        tracing::info!(
            provenance = %self.provenance,
            notices = self.notices.len(),
            placeholders,
            "{} model has {} advisory notice(s), {} placeholder class(es)",
            self.provenance,
            self.notices.len(),
            placeholders
        );
        for notice in &self.notices {
            tracing::debug!(kind = ?notice.kind, subject = %notice.subject, "{}", notice.message);
        }
    }
}
