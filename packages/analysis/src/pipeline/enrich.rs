//! Metric enrichment via per-metric detail calls.

use tracing::warn;

use crate::pipeline::parse::parse_metric_detail;
use crate::pipeline::prompts::format_metric_detail_prompt;
use crate::traits::ai::Ai;
use crate::types::report::{EnrichedMetric, RawMetric};

/// Enrich each metric with a product-specific example and explanation.
///
/// One detail call per metric, issued concurrently; results come back in
/// the input order. A failed call degrades that one metric to canned
/// fallback text and never affects its siblings.
pub async fn enrich_metrics(
    ai: &dyn Ai,
    metrics: &[RawMetric],
    business_type: &str,
    description: &str,
) -> Vec<EnrichedMetric> {
    let calls = metrics.iter().map(|metric| async move {
        let prompt = format_metric_detail_prompt(&metric.name, business_type, description);
        match ai.complete(&prompt).await {
            Ok(response) => {
                let detail = parse_metric_detail(&response);
                EnrichedMetric::new(metric.name.clone(), detail.example, detail.tooltip)
            }
            Err(error) => {
                warn!(metric = %metric.name, error = %error, "metric detail call failed");
                EnrichedMetric::fallback(&metric.name)
            }
        }
    });

    futures::future::join_all(calls).await
}
