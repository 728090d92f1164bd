//! Markdown report generator.

use super::escape::{code_span, escape_markdown_inline, escape_markdown_table};
use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::compare::{ComparisonResult, Severity, MISSING};
use std::fmt::Write;

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn value_cell(value: &str) -> String {
    if value == MISSING {
        "_missing_".to_string()
    } else {
        code_span(value)
    }
}

const fn severity_heading(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "Errors",
        Severity::Warning => "Warnings",
        Severity::Suggestion => "Suggestions",
        Severity::Info => "Info",
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate_report(
        &self,
        result: &ComparisonResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut md = String::new();

        writeln!(md, "# {}", escape_markdown_inline(config.title_or_default()))?;
        writeln!(md)?;

        if let (Some(code), Some(diagram)) = (
            config.metadata.code_model_path.as_deref(),
            config.metadata.diagram_model_path.as_deref(),
        ) {
            writeln!(md, "**Code model:** {}  ", code_span(code))?;
            writeln!(md, "**Diagram:** {}  ", code_span(diagram))?;
        }
        writeln!(md, "**Mode:** {}", result.mode)?;
        writeln!(md)?;

        let summary = &result.summary;
        writeln!(md, "## Summary")?;
        writeln!(md)?;
        writeln!(md, "| Severity | Count |")?;
        writeln!(md, "|----------|-------|")?;
        for severity in Severity::all() {
            writeln!(md, "| {} | {} |", severity, summary.count(*severity))?;
        }
        writeln!(md, "| **Total** | **{}** |", summary.total)?;
        writeln!(md)?;

        if result.is_empty() {
            writeln!(md, "Diagram and code are consistent.")?;
            return Ok(md);
        }

        let limit = config.max_items.unwrap_or(usize::MAX);
        for severity in Severity::all() {
            let count = summary.count(*severity);
            if count == 0 {
                continue;
            }
            writeln!(md, "## {} ({count})", severity_heading(*severity))?;
            writeln!(md)?;
            if config.include_tips {
                writeln!(md, "| Location | Kind | Diagram | Code | Summary | Tip |")?;
                writeln!(md, "|----------|------|---------|------|---------|-----|")?;
            } else {
                writeln!(md, "| Location | Kind | Diagram | Code | Summary |")?;
                writeln!(md, "|----------|------|---------|------|---------|")?;
            }

            for diff in result.with_severity(*severity).take(limit) {
                write!(
                    md,
                    "| {} | {} | {} | {} | {} |",
                    code_span(&diff.location),
                    diff.kind,
                    value_cell(&diff.diagram_value),
                    value_cell(&diff.code_value),
                    escape_markdown_table(&diff.summary),
                )?;
                if config.include_tips {
                    write!(md, " {} |", escape_markdown_table(&diff.tip))?;
                }
                writeln!(md)?;
            }
            if count > limit {
                writeln!(md)?;
                writeln!(md, "_... and {} more_", count - limit)?;
            }
            writeln!(md)?;
        }

        Ok(md)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{ComparisonMode, Difference, DifferenceKind};

    fn sample() -> ComparisonResult {
        ComparisonResult::from_differences(
            ComparisonMode::Strict,
            vec![
                Difference::new(
                    DifferenceKind::AttributeMismatch,
                    Severity::Error,
                    "Cart.attr:items",
                )
                .summary("Type of 'items' differs")
                .values("List<Item>", "Map<String, Item>")
                .tip("Update the diagram type"),
                Difference::new(DifferenceKind::ClassMissingInCode, Severity::Error, "Ghost")
                    .values("class Ghost", MISSING),
            ],
        )
    }

    #[test]
    fn test_markdown_groups_by_severity() {
        let md = MarkdownReporter::new()
            .generate_report(&sample(), &ReportConfig::default())
            .expect("render");
        assert!(md.starts_with("# UML Consistency Report"));
        assert!(md.contains("## Errors (2)"));
        assert!(!md.contains("## Warnings"));
        assert!(md.contains("| **Total** | **2** |"));
        assert!(md.contains("_missing_"));
    }

    #[test]
    fn test_generic_types_stay_inside_code_spans() {
        let md = MarkdownReporter::new()
            .generate_report(&sample(), &ReportConfig::default())
            .expect("render");
        assert!(md.contains("`List<Item>`"));
        assert!(md.contains("`Map<String, Item>`"));
    }

    #[test]
    fn test_summary_text_is_escaped() {
        let result = ComparisonResult::from_differences(
            ComparisonMode::Strict,
            vec![Difference::new(DifferenceKind::MethodMismatch, Severity::Warning, "A#f()")
                .summary("Returns List<T> | null")],
        );
        let md = MarkdownReporter::new()
            .generate_report(&result, &ReportConfig::default())
            .expect("render");
        assert!(md.contains("Returns List&lt;T&gt; \\| null"));
    }

    #[test]
    fn test_tips_column_optional() {
        let config = ReportConfig {
            include_tips: false,
            ..ReportConfig::default()
        };
        let md = MarkdownReporter::new()
            .generate_report(&sample(), &config)
            .expect("render");
        assert!(!md.contains("| Tip |"));
        assert!(!md.contains("Update the diagram type"));
    }

    #[test]
    fn test_consistent_models() {
        let md = MarkdownReporter::new()
            .generate_report(
                &ComparisonResult::new(ComparisonMode::Minimal),
                &ReportConfig::default(),
            )
            .expect("render");
        assert!(md.contains("consistent"));
        assert!(md.contains("**Mode:** minimal"));
    }
}
