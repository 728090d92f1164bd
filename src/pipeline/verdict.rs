//! Aggregate pass/fail decision for a comparison run.
//!
//! A run is inconsistent when at least one difference is at or above the
//! failure threshold. The threshold defaults to ERROR in every mode, so a
//! RELAXED or MINIMAL run with only warnings and suggestions passes. The
//! verdict is always taken from the unfiltered result.

use super::exit_codes;
use crate::compare::{ComparisonResult, Severity};
use std::fmt;

/// Failure threshold applied to a comparison result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailPolicy {
    pub fail_on: Severity,
}

impl Default for FailPolicy {
    fn default() -> Self {
        Self {
            fail_on: Severity::Error,
        }
    }
}

impl FailPolicy {
    #[must_use]
    pub const fn new(fail_on: Severity) -> Self {
        Self { fail_on }
    }

    /// Decide the verdict for a result.
    #[must_use]
    pub fn evaluate(&self, result: &ComparisonResult) -> Verdict {
        let failing = result
            .differences
            .iter()
            .filter(|d| d.severity.meets(self.fail_on))
            .count();
        if failing == 0 {
            Verdict::Consistent
        } else {
            Verdict::Inconsistent {
                failing,
                threshold: self.fail_on,
            }
        }
    }
}

/// Outcome of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Consistent,
    Inconsistent {
        /// Differences at or above the threshold
        failing: usize,
        threshold: Severity,
    },
}

impl Verdict {
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        matches!(self, Self::Consistent)
    }

    /// Process exit code for this verdict.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Consistent => exit_codes::SUCCESS,
            Self::Inconsistent { .. } => exit_codes::CHANGES_DETECTED,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Consistent => write!(f, "consistent"),
            Self::Inconsistent { failing, threshold } => write!(
                f,
                "inconsistent: {failing} difference(s) at or above {threshold}"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{ComparisonMode, Difference, DifferenceKind};

    fn result_with(severities: &[Severity]) -> ComparisonResult {
        ComparisonResult::from_differences(
            ComparisonMode::Relaxed,
            severities
                .iter()
                .map(|s| Difference::new(DifferenceKind::AttributeMismatch, *s, "A.attr:x"))
                .collect(),
        )
    }

    #[test]
    fn test_default_policy_fails_only_on_errors() {
        let policy = FailPolicy::default();
        assert_eq!(
            policy.evaluate(&result_with(&[Severity::Warning, Severity::Suggestion])),
            Verdict::Consistent
        );
        let verdict = policy.evaluate(&result_with(&[Severity::Error, Severity::Warning]));
        assert_eq!(
            verdict,
            Verdict::Inconsistent {
                failing: 1,
                threshold: Severity::Error
            }
        );
        assert_eq!(verdict.exit_code(), exit_codes::CHANGES_DETECTED);
    }

    #[test]
    fn test_lower_threshold_counts_more_severe() {
        let policy = FailPolicy::new(Severity::Warning);
        let verdict = policy.evaluate(&result_with(&[
            Severity::Error,
            Severity::Warning,
            Severity::Info,
        ]));
        assert!(matches!(verdict, Verdict::Inconsistent { failing: 2, .. }));
    }

    #[test]
    fn test_empty_result_is_consistent() {
        let verdict = FailPolicy::new(Severity::Info).evaluate(&result_with(&[]));
        assert!(verdict.is_consistent());
        assert_eq!(verdict.exit_code(), exit_codes::SUCCESS);
        assert_eq!(verdict.to_string(), "consistent");
    }
}
