//! Comparison stage.
//!
//! Runs the engine, takes the verdict from the full result and only then
//! applies the report filters.

use super::{FailPolicy, Verdict};
use crate::compare::{ComparisonResult, ConsistencyEngine};
use crate::config::CheckConfig;
use crate::model::UmlModel;

/// Output of the comparison stage.
#[derive(Debug, Clone)]
pub struct ComparisonOutcome {
    /// Verdict computed on the unfiltered result
    pub verdict: Verdict,
    /// Differences left after report filtering
    pub reported: ComparisonResult,
    /// Number of differences before filtering
    pub total_before_filtering: usize,
}

/// Compare two parsed models according to the check configuration.
pub fn run_comparison(
    config: &CheckConfig,
    code: &UmlModel,
    diagram: &UmlModel,
) -> ComparisonOutcome {
    let quiet = config.behavior.quiet;
    let mode = config.comparison.mode();

    if !quiet {
        tracing::info!("Comparing models in {} mode...", mode);
    }

    let mut result = ConsistencyEngine::new().with_mode(mode).compare(code, diagram);
    let verdict = FailPolicy::new(config.behavior.fail_on()).evaluate(&result);
    let total_before_filtering = result.differences.len();

    if let Some(min) = config.filtering.min_severity {
        result.filter_by_severity(min);
    }
    result.filter_by_kinds(&config.filtering.kinds);

    if !quiet {
        if config.filtering.is_active() {
            tracing::info!(
                "Found {} differences ({} shown after filtering)",
                total_before_filtering,
                result.summary.total
            );
        } else {
            tracing::info!("Found {} differences", total_before_filtering);
        }
    }

    ComparisonOutcome {
        verdict,
        reported: result,
        total_before_filtering,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{ComparisonMode, DifferenceKind, Severity};
    use crate::config::{AppConfig, CheckPaths};
    use crate::model::{ClassKind, ModelBuilder, Provenance, RelationshipKind};
    use std::path::PathBuf;

    fn check_config(app: AppConfig) -> CheckConfig {
        CheckConfig::from_app_config(
            CheckPaths {
                code: PathBuf::from("code.json"),
                diagram: PathBuf::from("diagram.json"),
            },
            app,
        )
    }

    fn models() -> (UmlModel, UmlModel) {
        let mut code = ModelBuilder::new(Provenance::Code);
        code.declare_class("Order", ClassKind::Class);
        code.declare_class("Audit", ClassKind::Class);
        let mut diagram = ModelBuilder::new(Provenance::Diagram);
        diagram.declare_class("Order", ClassKind::Class);
        diagram.declare_class("Ghost", ClassKind::Class);
        diagram.add_relationship("Order", "Ghost", RelationshipKind::Dependency);
        (code.build(), diagram.build())
    }

    #[test]
    fn test_verdict_ignores_filters() {
        let (code, diagram) = models();
        let config = check_config(
            AppConfig::builder()
                .mode(ComparisonMode::Relaxed)
                .kinds(vec![DifferenceKind::ClassMissingInUml])
                .build(),
        );
        let outcome = run_comparison(&config, &code, &diagram);

        assert!(!outcome.verdict.is_consistent());
        assert_eq!(outcome.reported.differences.len(), 1);
        assert_eq!(outcome.reported.differences[0].kind, DifferenceKind::ClassMissingInUml);
        assert_eq!(outcome.reported.differences[0].severity, Severity::Info);
        assert!(outcome.total_before_filtering > outcome.reported.differences.len());
    }

    #[test]
    fn test_min_severity_filter() {
        let (code, diagram) = models();
        let config = check_config(
            AppConfig::builder()
                .mode(ComparisonMode::Relaxed)
                .min_severity(Some(Severity::Error))
                .quiet(true)
                .build(),
        );
        let outcome = run_comparison(&config, &code, &diagram);
        assert!(outcome
            .reported
            .differences
            .iter()
            .all(|d| d.severity == Severity::Error));
        assert_eq!(outcome.reported.summary.infos, 0);
    }
}
