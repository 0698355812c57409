//! Analysis result types.

use serde::{Deserialize, Serialize};

/// Decision from the product gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// The page looks like a product site; proceed with analysis.
    Admit,

    /// The page does not look like a product site.
    Reject {
        /// Stable machine-readable reason (`not_product_company`).
        reason: &'static str,
        /// Human-readable message referencing the submitted URL.
        message: String,
    },
}

impl GateDecision {
    /// Whether the decision admits the page for analysis.
    pub fn is_admit(&self) -> bool {
        matches!(self, GateDecision::Admit)
    }
}

/// A metric name as extracted from the page-analysis response.
///
/// Order-preserving; duplicates are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMetric {
    pub name: String,
}

impl RawMetric {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Parser output for the whole-page analysis response, before enrichment.
///
/// All fields degrade to empty on malformed input; the parser never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedAnalysis {
    pub business_type: String,
    pub description: String,
    pub metrics: Vec<RawMetric>,
}

/// A metric augmented with a product-specific example and a general
/// explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedMetric {
    pub name: String,
    pub example: String,
    pub tooltip: String,
}

impl EnrichedMetric {
    pub fn new(
        name: impl Into<String>,
        example: impl Into<String>,
        tooltip: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            example: example.into(),
            tooltip: tooltip.into(),
        }
    }

    /// Canned replacement for a metric whose detail call failed.
    pub fn fallback(name: &str) -> Self {
        Self {
            name: name.to_string(),
            example: format!("Example for {} not available", name),
            tooltip: format!("Explanation of {} not available", name),
        }
    }
}

/// Final, immutable analysis of a website.
///
/// `metrics` always holds exactly three entries; the assembler truncates or
/// pads before this value is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub business_type: String,
    pub description: String,
    pub metrics: Vec<EnrichedMetric>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_metric_text() {
        let metric = EnrichedMetric::fallback("Churn Rate");
        assert_eq!(metric.name, "Churn Rate");
        assert_eq!(metric.example, "Example for Churn Rate not available");
        assert_eq!(metric.tooltip, "Explanation of Churn Rate not available");
    }

    #[test]
    fn test_analysis_serializes_expected_fields() {
        let analysis = Analysis {
            business_type: "B2B".to_string(),
            description: "A tool".to_string(),
            metrics: vec![EnrichedMetric::new("Retention", "ex", "tip")],
        };

        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["business_type"], "B2B");
        assert_eq!(json["description"], "A tool");
        assert_eq!(json["metrics"][0]["name"], "Retention");
        assert_eq!(json["metrics"][0]["example"], "ex");
        assert_eq!(json["metrics"][0]["tooltip"], "tip");
    }
}
