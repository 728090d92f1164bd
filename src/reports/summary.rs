//! Summary report generator for shell output.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::compare::{ComparisonResult, Severity};

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "red",
        Severity::Warning => "yellow",
        Severity::Suggestion => "cyan",
        Severity::Info => "dim",
    }
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    colored: bool,
}

impl SummaryReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_report(
        &self,
        result: &ComparisonResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        lines.push(self.color(config.title_or_default(), "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        if let (Some(code), Some(diagram)) = (
            config.metadata.code_model_path.as_deref(),
            config.metadata.diagram_model_path.as_deref(),
        ) {
            lines.push(format!("{}  {code} vs {diagram}", self.color("Files:", "cyan")));
        }
        lines.push(format!("{}   {}", self.color("Mode:", "cyan"), result.mode));

        let summary = &result.summary;
        if result.is_empty() {
            lines.push(String::new());
            lines.push(self.color("Diagram and code are consistent", "green"));
            lines.push(String::new());
            return Ok(lines.join("\n"));
        }

        lines.push(format!(
            "{} {} ({}, {}, {}, {})",
            self.color("Found:", "cyan"),
            plural(summary.total, "difference"),
            plural(summary.errors, "error"),
            plural(summary.warnings, "warning"),
            plural(summary.suggestions, "suggestion"),
            plural(summary.infos, "info"),
        ));

        for severity in Severity::all() {
            let count = summary.count(*severity);
            if count == 0 {
                continue;
            }
            lines.push(String::new());
            lines.push(self.color(&format!("{severity} ({count})"), severity_color(*severity)));

            let limit = config.max_items.unwrap_or(usize::MAX);
            for diff in result.with_severity(*severity).take(limit) {
                lines.push(format!(
                    "  {}  {}",
                    self.color(&diff.location, "bold"),
                    diff.summary
                ));
                lines.push(format!(
                    "      diagram: {}  code: {}",
                    diff.diagram_value, diff.code_value
                ));
                if config.include_tips && !diff.tip.is_empty() {
                    lines.push(format!("      {}", self.color(&format!("tip: {}", diff.tip), "dim")));
                }
            }
            if count > limit {
                lines.push(self.color(&format!("  ... and {} more", count - limit), "dim"));
            }
        }

        lines.push(String::new());
        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{ComparisonMode, Difference, DifferenceKind};

    fn result() -> ComparisonResult {
        ComparisonResult::from_differences(
            ComparisonMode::Strict,
            vec![
                Difference::new(DifferenceKind::MethodMismatch, Severity::Error, "Order#total()")
                    .summary("Return type of 'total' differs")
                    .values("String", "double")
                    .tip("Change the diagram return type to 'double'"),
                Difference::new(DifferenceKind::ClassMissingInUml, Severity::Info, "Audit"),
            ],
        )
    }

    #[test]
    fn test_plain_summary() {
        let report = SummaryReporter::new()
            .no_color()
            .generate_report(&result(), &ReportConfig::default())
            .expect("render");
        assert!(report.contains("Mode:   strict"));
        assert!(report.contains("2 differences (1 error, 0 warnings, 0 suggestions, 1 info)"));
        assert!(report.contains("ERROR (1)"));
        assert!(report.contains("Order#total()  Return type of 'total' differs"));
        assert!(report.contains("diagram: String  code: double"));
        assert!(report.contains("tip: Change the diagram return type"));
        assert!(!report.contains("\x1b["));
    }

    #[test]
    fn test_consistent_result() {
        let empty = ComparisonResult::new(ComparisonMode::Relaxed);
        let report = SummaryReporter::new()
            .no_color()
            .generate_report(&empty, &ReportConfig::default())
            .expect("render");
        assert!(report.contains("consistent"));
    }

    #[test]
    fn test_max_items_truncates() {
        let config = ReportConfig {
            max_items: Some(0),
            ..ReportConfig::default()
        };
        let report = SummaryReporter::new()
            .no_color()
            .generate_report(&result(), &config)
            .expect("render");
        assert!(report.contains("... and 1 more"));
        assert!(!report.contains("Order#total()"));
    }

    #[test]
    fn test_colored_output() {
        let report = SummaryReporter::new()
            .generate_report(&result(), &ReportConfig::default())
            .expect("render");
        assert!(report.contains("\x1b[31mERROR (1)\x1b[0m"));
    }
}
