//! Comparison result structures.

use super::ComparisonMode;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder value for the side on which something does not exist.
pub const MISSING: &str = "missing";

/// Severity of a single difference, most severe first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    ValueEnum,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    #[serde(alias = "error")]
    Error,
    #[serde(alias = "warning")]
    Warning,
    #[serde(alias = "suggestion")]
    Suggestion,
    #[serde(alias = "info")]
    Info,
}

impl Severity {
    /// All severities, most severe first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Error, Self::Warning, Self::Suggestion, Self::Info]
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Suggestion => "SUGGESTION",
            Self::Info => "INFO",
        }
    }

    /// Parse a severity name, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "error" => Some(Self::Error),
            "warning" | "warn" => Some(Self::Warning),
            "suggestion" => Some(Self::Suggestion),
            "info" => Some(Self::Info),
            _ => None,
        }
    }

    /// Whether this severity is at least as severe as `threshold`.
    #[must_use]
    pub fn meets(&self, threshold: Self) -> bool {
        *self <= threshold
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Closed taxonomy of difference kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DifferenceKind {
    ClassMissingInCode,
    ClassMissingInUml,
    AttributeMissingInCode,
    AttributeMissingInUml,
    AttributeMismatch,
    MethodMissingInCode,
    MethodMissingInUml,
    MethodMismatch,
    RelationshipMissingInCode,
    RelationshipMissingInUml,
    RelationshipMismatch,
}

impl DifferenceKind {
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::ClassMissingInCode,
            Self::ClassMissingInUml,
            Self::AttributeMissingInCode,
            Self::AttributeMissingInUml,
            Self::AttributeMismatch,
            Self::MethodMissingInCode,
            Self::MethodMissingInUml,
            Self::MethodMismatch,
            Self::RelationshipMissingInCode,
            Self::RelationshipMissingInUml,
            Self::RelationshipMismatch,
        ]
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ClassMissingInCode => "CLASS_MISSING_IN_CODE",
            Self::ClassMissingInUml => "CLASS_MISSING_IN_UML",
            Self::AttributeMissingInCode => "ATTRIBUTE_MISSING_IN_CODE",
            Self::AttributeMissingInUml => "ATTRIBUTE_MISSING_IN_UML",
            Self::AttributeMismatch => "ATTRIBUTE_MISMATCH",
            Self::MethodMissingInCode => "METHOD_MISSING_IN_CODE",
            Self::MethodMissingInUml => "METHOD_MISSING_IN_UML",
            Self::MethodMismatch => "METHOD_MISMATCH",
            Self::RelationshipMissingInCode => "RELATIONSHIP_MISSING_IN_CODE",
            Self::RelationshipMissingInUml => "RELATIONSHIP_MISSING_IN_UML",
            Self::RelationshipMismatch => "RELATIONSHIP_MISMATCH",
        }
    }

    /// Parse a kind name such as `METHOD_MISMATCH` (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let wanted = s.trim().replace('-', "_").to_ascii_uppercase();
        Self::all().iter().copied().find(|k| k.name() == wanted)
    }

    #[must_use]
    pub const fn is_relationship(&self) -> bool {
        matches!(
            self,
            Self::RelationshipMissingInCode
                | Self::RelationshipMissingInUml
                | Self::RelationshipMismatch
        )
    }
}

impl fmt::Display for DifferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single discrepancy between the diagram and the code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difference {
    pub kind: DifferenceKind,
    pub severity: Severity,
    /// `Class`, `Class.attr:field`, `Class#signature` or `A -> B`
    pub location: String,
    /// One-line human summary
    pub summary: String,
    /// Value observed in the diagram, or [`MISSING`]
    pub diagram_value: String,
    /// Value observed in the code, or [`MISSING`]
    pub code_value: String,
    /// One-line remediation tip
    pub tip: String,
}

impl Difference {
    pub fn new(kind: DifferenceKind, severity: Severity, location: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            location: location.into(),
            summary: String::new(),
            diagram_value: MISSING.to_string(),
            code_value: MISSING.to_string(),
            tip: String::new(),
        }
    }

    #[must_use]
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    #[must_use]
    pub fn values(mut self, diagram: impl Into<String>, code: impl Into<String>) -> Self {
        self.diagram_value = diagram.into();
        self.code_value = code.into();
        self
    }

    #[must_use]
    pub fn tip(mut self, tip: impl Into<String>) -> Self {
        self.tip = tip.into();
        self
    }
}

/// Location string for a class.
#[must_use]
pub fn class_location(class: &str) -> String {
    class.to_string()
}

/// Location string for a field.
#[must_use]
pub fn attribute_location(class: &str, field: &str) -> String {
    format!("{class}.attr:{field}")
}

/// Location string for a method.
#[must_use]
pub fn method_location(class: &str, signature: &str) -> String {
    format!("{class}#{signature}")
}

/// Counts per severity and per family.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub total: usize,
    pub errors: usize,
    pub warnings: usize,
    pub suggestions: usize,
    pub infos: usize,
    pub class_differences: usize,
    pub member_differences: usize,
    pub relationship_differences: usize,
}

impl ComparisonSummary {
    /// Count for one severity.
    #[must_use]
    pub const fn count(&self, severity: Severity) -> usize {
        match severity {
            Severity::Error => self.errors,
            Severity::Warning => self.warnings,
            Severity::Suggestion => self.suggestions,
            Severity::Info => self.infos,
        }
    }
}

/// Ordered output of one comparison run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[must_use]
pub struct ComparisonResult {
    pub mode: ComparisonMode,
    pub summary: ComparisonSummary,
    pub differences: Vec<Difference>,
}

impl ComparisonResult {
    pub fn new(mode: ComparisonMode) -> Self {
        Self {
            mode,
            summary: ComparisonSummary::default(),
            differences: Vec::new(),
        }
    }

    /// Build from an ordered difference list.
    pub fn from_differences(mode: ComparisonMode, differences: Vec<Difference>) -> Self {
        let mut result = Self {
            mode,
            summary: ComparisonSummary::default(),
            differences,
        };
        result.calculate_summary();
        result
    }

    /// Recalculate summary statistics
    pub fn calculate_summary(&mut self) {
        let mut summary = ComparisonSummary {
            total: self.differences.len(),
            ..ComparisonSummary::default()
        };
        for diff in &self.differences {
            match diff.severity {
                Severity::Error => summary.errors += 1,
                Severity::Warning => summary.warnings += 1,
                Severity::Suggestion => summary.suggestions += 1,
                Severity::Info => summary.infos += 1,
            }
            match diff.kind {
                DifferenceKind::ClassMissingInCode | DifferenceKind::ClassMissingInUml => {
                    summary.class_differences += 1;
                }
                kind if kind.is_relationship() => summary.relationship_differences += 1,
                _ => summary.member_differences += 1,
            }
        }
        self.summary = summary;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.differences.is_empty()
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.summary.errors > 0
    }

    /// Differences of one severity, in original order.
    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Difference> {
        self.differences
            .iter()
            .filter(move |d| d.severity == severity)
    }

    /// Differences of one kind, in original order.
    pub fn with_kind(&self, kind: DifferenceKind) -> impl Iterator<Item = &Difference> {
        self.differences.iter().filter(move |d| d.kind == kind)
    }

    /// Keep only differences at least as severe as `min`.
    pub fn filter_by_severity(&mut self, min: Severity) {
        self.differences.retain(|d| d.severity.meets(min));
        self.calculate_summary();
    }

    /// Keep only differences of the given kinds. An empty list keeps everything.
    pub fn filter_by_kinds(&mut self, kinds: &[DifferenceKind]) {
        if kinds.is_empty() {
            return;
        }
        self.differences.retain(|d| kinds.contains(&d.kind));
        self.calculate_summary();
    }
}
