//! Strictness modes and the per-run severity policy.
//!
//! A [`ModePolicy`] is selected once per comparison and threaded through every
//! comparator, so each severity table lives here rather than in branches
//! scattered across the comparators.

use super::Severity;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison strictness selected by the caller.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonMode {
    /// Diagram and code must agree on everything
    #[default]
    Strict,
    /// Code may be ahead of the diagram; types compare loosely
    Relaxed,
    /// Code is ground truth; omitted diagram details are suggestions
    Minimal,
}

impl ComparisonMode {
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Strict, Self::Relaxed, Self::Minimal]
    }

    /// Parse a mode name, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Some(Self::Strict),
            "relaxed" => Some(Self::Relaxed),
            "minimal" => Some(Self::Minimal),
            _ => None,
        }
    }

    #[must_use]
    pub fn policy(self) -> ModePolicy {
        ModePolicy::for_mode(self)
    }
}

impl fmt::Display for ComparisonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Relaxed => write!(f, "relaxed"),
            Self::Minimal => write!(f, "minimal"),
        }
    }
}

/// Which member rule family applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberFamily {
    /// Every diagram member must be fully declared and match.
    Declared,
    /// Code is ground truth; omitted diagram details are tolerated.
    CodeFirst,
}

/// How visibility disagreements on methods are judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityRule {
    /// Any difference is an error.
    Exact,
    /// Code may be more open than the diagram.
    CodeMayBeMoreOpen,
}

/// Declarative severity table for one comparison run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModePolicy {
    pub mode: ComparisonMode,
    pub member_family: MemberFamily,
    /// Relaxed type equality for return types and overload fallback
    pub relaxed_types: bool,
    pub method_visibility: VisibilityRule,
    /// Class declared in code but absent from the diagram
    pub class_only_in_code: Severity,
    /// Field or method declared in code but absent from the diagram
    pub member_only_in_code: Severity,
    /// Inheritance or ownership edge present only in code
    pub structural_omission: Severity,
    /// Both sides own, with different strengths
    pub ownership_strength_mismatch: Severity,
    /// Diagram shows a dependency where code owns
    pub weaker_dependency: Severity,
}

impl ModePolicy {
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            mode: ComparisonMode::Strict,
            member_family: MemberFamily::Declared,
            relaxed_types: false,
            method_visibility: VisibilityRule::Exact,
            class_only_in_code: Severity::Error,
            member_only_in_code: Severity::Error,
            structural_omission: Severity::Error,
            ownership_strength_mismatch: Severity::Error,
            weaker_dependency: Severity::Error,
        }
    }

    #[must_use]
    pub const fn relaxed() -> Self {
        Self {
            mode: ComparisonMode::Relaxed,
            member_family: MemberFamily::Declared,
            relaxed_types: true,
            method_visibility: VisibilityRule::CodeMayBeMoreOpen,
            class_only_in_code: Severity::Info,
            member_only_in_code: Severity::Info,
            structural_omission: Severity::Warning,
            ownership_strength_mismatch: Severity::Warning,
            weaker_dependency: Severity::Suggestion,
        }
    }

    /// Member-level values here are unused; the code-first family grades
    /// code-only members by their visibility instead.
    #[must_use]
    pub const fn minimal() -> Self {
        Self {
            mode: ComparisonMode::Minimal,
            member_family: MemberFamily::CodeFirst,
            relaxed_types: false,
            method_visibility: VisibilityRule::CodeMayBeMoreOpen,
            class_only_in_code: Severity::Info,
            member_only_in_code: Severity::Info,
            structural_omission: Severity::Warning,
            ownership_strength_mismatch: Severity::Warning,
            weaker_dependency: Severity::Suggestion,
        }
    }

    #[must_use]
    pub const fn for_mode(mode: ComparisonMode) -> Self {
        match mode {
            ComparisonMode::Strict => Self::strict(),
            ComparisonMode::Relaxed => Self::relaxed(),
            ComparisonMode::Minimal => Self::minimal(),
        }
    }

    /// Type equality used for method return types.
    #[must_use]
    pub fn return_types_equal(&self, diagram: &str, code: &str) -> bool {
        if self.relaxed_types {
            super::equivalence::types_equal_relaxed(diagram, code)
        } else {
            super::equivalence::types_equal_strict(diagram, code)
        }
    }
}

impl Default for ModePolicy {
    fn default() -> Self {
        Self::strict()
    }
}
