//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::compare::{
    ComparisonMode, ComparisonResult, ComparisonSummary, Difference, DifferenceKind, Severity,
};
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_report(
        &self,
        result: &ComparisonResult,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let limit = config.max_items.unwrap_or(usize::MAX);
        let differences: Vec<JsonDifference<'_>> = result
            .differences
            .iter()
            .take(limit)
            .map(|diff| JsonDifference::new(diff, config.include_tips))
            .collect();

        let report = JsonComparisonReport {
            metadata: JsonReportMetadata {
                tool: ToolInfo {
                    name: env!("CARGO_PKG_NAME").to_string(),
                    version: config.metadata.tool_version.clone(),
                },
                generated_at: Utc::now().to_rfc3339(),
                title: config.title_or_default().to_string(),
                code_model: config.metadata.code_model_path.clone(),
                diagram_model: config.metadata.diagram_model_path.clone(),
            },
            mode: result.mode,
            summary: &result.summary,
            truncated: result.differences.len() > differences.len(),
            differences,
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        };
        json.map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

// JSON structures

#[derive(Serialize)]
struct JsonComparisonReport<'a> {
    metadata: JsonReportMetadata,
    mode: ComparisonMode,
    summary: &'a ComparisonSummary,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    truncated: bool,
    differences: Vec<JsonDifference<'a>>,
}

#[derive(Serialize)]
struct JsonReportMetadata {
    tool: ToolInfo,
    generated_at: String,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    diagram_model: Option<String>,
}

#[derive(Serialize)]
struct ToolInfo {
    name: String,
    version: String,
}

#[derive(Serialize)]
struct JsonDifference<'a> {
    kind: DifferenceKind,
    severity: Severity,
    location: &'a str,
    summary: &'a str,
    diagram_value: &'a str,
    code_value: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    tip: Option<&'a str>,
}

impl<'a> JsonDifference<'a> {
    fn new(diff: &'a Difference, include_tips: bool) -> Self {
        Self {
            kind: diff.kind,
            severity: diff.severity,
            location: &diff.location,
            summary: &diff.summary,
            diagram_value: &diff.diagram_value,
            code_value: &diff.code_value,
            tip: (include_tips && !diff.tip.is_empty()).then_some(diff.tip.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ComparisonResult {
        ComparisonResult::from_differences(
            ComparisonMode::Relaxed,
            vec![Difference::new(
                DifferenceKind::RelationshipMismatch,
                Severity::Warning,
                "Order -> OrderLine",
            )
            .summary("Ownership strength differs")
            .values("AGGREGATION", "COMPOSITION")],
        )
    }

    #[test]
    fn test_json_structure() {
        let json = JsonReporter::new()
            .generate_report(&sample(), &ReportConfig::default())
            .expect("render");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["metadata"]["tool"]["name"], "uml-check");
        assert_eq!(value["mode"], "relaxed");
        assert_eq!(value["summary"]["warnings"], 1);
        assert_eq!(value["differences"][0]["kind"], "RELATIONSHIP_MISMATCH");
        assert_eq!(value["differences"][0]["severity"], "WARNING");
        assert_eq!(value["differences"][0]["diagram_value"], "AGGREGATION");
        assert!(value.get("truncated").is_none());
        assert!(value["differences"][0].get("tip").is_none());
    }

    #[test]
    fn test_compact_output_is_single_line() {
        let json = JsonReporter::new()
            .pretty(false)
            .generate_report(&sample(), &ReportConfig::default())
            .expect("render");
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_truncation_flag() {
        let config = ReportConfig {
            max_items: Some(0),
            ..ReportConfig::default()
        };
        let json = JsonReporter::new()
            .generate_report(&sample(), &config)
            .expect("render");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["truncated"], true);
        assert_eq!(value["summary"]["total"], 1);
        assert_eq!(value["differences"].as_array().map(Vec::len), Some(0));
    }
}
