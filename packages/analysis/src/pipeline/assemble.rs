//! Result assembly: the exactly-three-metrics guarantee.

use crate::types::report::{Analysis, EnrichedMetric};

/// Number of metrics every successful analysis carries.
pub const METRIC_COUNT: usize = 3;

/// Fixed catalog of canned default metrics used to pad short lists.
///
/// The catalog is slot-indexed: a list with N metrics present is padded
/// with the catalog entries at positions N..3, so already-present metrics
/// are never replaced.
pub fn default_metrics(url: &str) -> [EnrichedMetric; METRIC_COUNT] {
    [
        EnrichedMetric::new(
            "User Engagement Rate",
            format!(
                "Tracking how often users interact with key features of {}",
                url
            ),
            "Measures the frequency and depth of user interactions with a product. \
             High engagement often correlates with user satisfaction and product stickiness.",
        ),
        EnrichedMetric::new(
            "Customer Retention Rate",
            format!(
                "Percentage of users who continue using {} after their first month",
                url
            ),
            "Shows how well the product retains its users over time. Higher retention \
             indicates strong product-market fit and user satisfaction.",
        ),
        EnrichedMetric::new(
            "Feature Adoption Rate",
            format!("Percentage of users utilizing the core features of {}", url),
            "Tracks how many users are taking advantage of key product features. Higher \
             adoption rates suggest better product understanding and value delivery.",
        ),
    ]
}

/// Assemble the final analysis, guaranteeing exactly three metrics.
///
/// Lists longer than three are truncated to the first three in their
/// original order; shorter lists are padded from the default catalog.
pub fn assemble(
    business_type: String,
    description: String,
    mut metrics: Vec<EnrichedMetric>,
    url: &str,
) -> Analysis {
    let defaults = default_metrics(url);

    while metrics.len() < METRIC_COUNT {
        metrics.push(defaults[metrics.len()].clone());
    }
    metrics.truncate(METRIC_COUNT);

    Analysis {
        business_type,
        description,
        metrics,
    }
}
