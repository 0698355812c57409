//! Product gate: decides whether a page qualifies for analysis.

use crate::types::page::PageExcerpt;
use crate::types::report::GateDecision;

/// Vocabulary of product-indicator terms.
///
/// A term counts once no matter how often it appears, and matching is
/// case-insensitive substring containment over the excerpt text and the
/// joined meta values.
pub const PRODUCT_KEYWORDS: [&str; 15] = [
    "pricing",
    "features",
    "product",
    "platform",
    "trial",
    "download",
    "subscribe",
    "software",
    "app",
    "solution",
    "dashboard",
    "integration",
    "api",
    "signup",
    "demo",
];

/// Minimum number of distinct vocabulary terms required to admit a page.
pub const ADMIT_THRESHOLD: usize = 3;

/// Score an excerpt against the product vocabulary and decide admission.
///
/// Pure and deterministic: the same excerpt always yields the same
/// decision, independent of term iteration order.
pub fn evaluate(excerpt: &PageExcerpt, url: &str) -> GateDecision {
    let count = keyword_count(excerpt);
    if count >= ADMIT_THRESHOLD {
        GateDecision::Admit
    } else {
        GateDecision::Reject {
            reason: "not_product_company",
            message: rejection_message(url),
        }
    }
}

/// Count distinct vocabulary terms present in the excerpt.
pub fn keyword_count(excerpt: &PageExcerpt) -> usize {
    let text = excerpt.text.to_lowercase();
    let meta = excerpt.meta_values.join(" ").to_lowercase();

    PRODUCT_KEYWORDS
        .iter()
        .filter(|keyword| text.contains(*keyword) || meta.contains(*keyword))
        .count()
}

/// Rejection message shown to the caller, echoing the submitted URL.
pub fn rejection_message(url: &str) -> String {
    format!(
        "This tool is designed for product companies. It looks like {} might be \
         a service-based company or not a product website. Try a product-based URL.",
        url
    )
}
