//! Directed relationships between classes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of relationship kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationshipKind {
    Generalization,
    Realization,
    Association,
    Aggregation,
    Composition,
    Dependency,
}

impl RelationshipKind {
    /// Parse a kind name, case-insensitively. Common aliases are accepted.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GENERALIZATION" | "EXTENDS" | "INHERITANCE" => Some(Self::Generalization),
            "REALIZATION" | "IMPLEMENTS" => Some(Self::Realization),
            "ASSOCIATION" => Some(Self::Association),
            "AGGREGATION" => Some(Self::Aggregation),
            "COMPOSITION" => Some(Self::Composition),
            "DEPENDENCY" | "USES" => Some(Self::Dependency),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Generalization => "GENERALIZATION",
            Self::Realization => "REALIZATION",
            Self::Association => "ASSOCIATION",
            Self::Aggregation => "AGGREGATION",
            Self::Composition => "COMPOSITION",
            Self::Dependency => "DEPENDENCY",
        }
    }

    #[must_use]
    pub const fn is_inheritance(&self) -> bool {
        matches!(self, Self::Generalization | Self::Realization)
    }

    /// Position on the ownership ladder, if this is an ownership kind.
    #[must_use]
    pub const fn ownership(&self) -> Option<OwnershipStrength> {
        match self {
            Self::Association => Some(OwnershipStrength::Association),
            Self::Aggregation => Some(OwnershipStrength::Aggregation),
            Self::Composition => Some(OwnershipStrength::Composition),
            _ => None,
        }
    }
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The ownership ladder, weakest first. Ordering is the dominance order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OwnershipStrength {
    Association,
    Aggregation,
    Composition,
}

impl OwnershipStrength {
    #[must_use]
    pub const fn kind(&self) -> RelationshipKind {
        match self {
            Self::Association => RelationshipKind::Association,
            Self::Aggregation => RelationshipKind::Aggregation,
            Self::Composition => RelationshipKind::Composition,
        }
    }
}

/// A directed edge `source -> target`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relationship {
    pub source: String,
    pub target: String,
    pub kind: RelationshipKind,
}

impl Relationship {
    #[must_use]
    pub fn new(source: impl Into<String>, target: impl Into<String>, kind: RelationshipKind) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            kind,
        }
    }

    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// Whether both endpoints name something.
    #[must_use]
    pub fn has_endpoints(&self) -> bool {
        !self.source.trim().is_empty() && !self.target.trim().is_empty()
    }

    /// Whether comparators should look at this edge at all.
    #[must_use]
    pub fn is_comparable(&self) -> bool {
        self.has_endpoints() && !self.is_self_loop()
    }

    /// Location label used in reports, e.g. `Order -> OrderLine`.
    #[must_use]
    pub fn location(&self) -> String {
        pair_location(&self.source, &self.target)
    }
}

/// Location label for an ordered pair.
#[must_use]
pub fn pair_location(source: &str, target: &str) -> String {
    format!("{source} -> {target}")
}
