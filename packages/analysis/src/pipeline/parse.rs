//! Free-text response parsing.
//!
//! The upstream text is unstructured natural language, so both parsers here
//! are lenient line-oriented scans: every unmatched line is a no-op and
//! malformed input degrades to empty fields rather than an error.

use regex::Regex;

use crate::types::report::{ParsedAnalysis, RawMetric};

/// Parsed detail response for a single metric.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricDetail {
    pub example: String,
    pub tooltip: String,
}

/// Parse the whole-page analysis response.
///
/// Line-oriented scan with a sticky metrics latch:
/// - a line containing "business type" assigns the business type from the
///   text after the first colon (the whole line if there is none); later
///   matches overwrite earlier ones;
/// - a line containing "description" assigns the description the same way;
/// - a line containing "metrics" opens the metrics section without
///   contributing a metric itself;
/// - once the metrics section is open, every line starting with an ordinal
///   (`1.`, `2.`, ...) contributes a metric named by the rest of the line;
///   duplicates are kept and the list is not resized here.
///
/// Total over any input: zero matching lines yield empty fields and an
/// empty metrics list.
pub fn parse_analysis_response(text: &str) -> ParsedAnalysis {
    let ordinal = Regex::new(r"^\d+\.\s*").expect("static regex is valid");

    let mut result = ParsedAnalysis::default();
    let mut metrics_started = false;

    for raw_line in text.split('\n') {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        let lower = line.to_lowercase();

        if lower.contains("business type") {
            result.business_type = value_after_colon(line);
        } else if lower.contains("description") {
            result.description = value_after_colon(line);
        } else if lower.contains("metrics") {
            metrics_started = true;
        } else if metrics_started {
            if let Some(prefix) = ordinal.find(line) {
                let name = line[prefix.end()..].trim();
                if !name.is_empty() {
                    result.metrics.push(RawMetric::new(name));
                }
            }
        }
    }

    result
}

/// Parse a metric-detail response into its example and explanation.
///
/// Scans lines for the case-insensitive prefixes `example:` and
/// `explanation:`; a prefix that never appears leaves its field empty.
pub fn parse_metric_detail(text: &str) -> MetricDetail {
    let mut detail = MetricDetail::default();

    for raw_line in text.split('\n') {
        let line = raw_line.trim();
        let lower = line.to_lowercase();

        if lower.starts_with("example:") {
            detail.example = value_after_colon(line);
        } else if lower.starts_with("explanation:") {
            detail.tooltip = value_after_colon(line);
        }
    }

    detail
}

/// Text after the first colon, trimmed; the whole line if there is none.
fn value_after_colon(line: &str) -> String {
    match line.split_once(':') {
        Some((_, value)) => value.trim().to_string(),
        None => line.to_string(),
    }
}
