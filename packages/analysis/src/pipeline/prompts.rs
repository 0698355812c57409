//! Prompt templates for the analysis pipeline.

/// Character budget for the page excerpt embedded in the analysis prompt.
pub const EXCERPT_PROMPT_BUDGET: usize = 1000;

/// Prompt for the whole-page analysis.
pub const ANALYSIS_PROMPT: &str = r#"Based on this website content, provide a structured analysis with exactly these components:

1. Business type (B2B, B2C, or both): [your answer]
2. Brief product description: [your answer]
3. The three most important metrics specific to this type of product (be very specific to the product):
   1. [first metric name]
   2. [second metric name]
   3. [third metric name]

Content to analyze: {content}

Note: For metrics, provide specific, measurable metrics that directly relate to this product's success. Avoid generic metrics."#;

/// Prompt for enriching a single metric with an example and explanation.
pub const METRIC_DETAIL_PROMPT: &str = r#"For a {business_type} product that {description}, provide the following about the metric '{metric}':
1. A practical example of how this metric specifically applies to this product (1 sentence, be very specific)
2. A clear explanation of what this metric means in general and why it matters (2-3 sentences)

Format:
Example: [specific example for this product]
Explanation: [general explanation of the metric]"#;

/// Format the analysis prompt, truncating the excerpt to its budget.
pub fn format_analysis_prompt(excerpt_text: &str) -> String {
    ANALYSIS_PROMPT.replace("{content}", &truncate_chars(excerpt_text, EXCERPT_PROMPT_BUDGET))
}

/// Format the per-metric detail prompt.
pub fn format_metric_detail_prompt(metric: &str, business_type: &str, description: &str) -> String {
    METRIC_DETAIL_PROMPT
        .replace("{business_type}", business_type)
        .replace("{description}", description)
        .replace("{metric}", metric)
}

/// Truncate to at most `limit` characters (not bytes, not words).
fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_prompt_embeds_excerpt() {
        let formatted = format_analysis_prompt("A platform for shipping dashboards");
        assert!(formatted.contains("A platform for shipping dashboards"));
        assert!(formatted.contains("Business type (B2B, B2C, or both)"));
        assert!(formatted.contains("Avoid generic metrics"));
    }

    #[test]
    fn test_analysis_prompt_truncates_to_budget() {
        let long = "x".repeat(5000);
        let formatted = format_analysis_prompt(&long);

        let embedded_len = formatted.matches('x').count();
        assert_eq!(embedded_len, EXCERPT_PROMPT_BUDGET);
    }

    #[test]
    fn test_truncation_is_char_based() {
        // Multi-byte characters must not split or panic.
        let text = "é".repeat(1200);
        let truncated = truncate_chars(&text, EXCERPT_PROMPT_BUDGET);
        assert_eq!(truncated.chars().count(), EXCERPT_PROMPT_BUDGET);
    }

    #[test]
    fn test_short_input_passes_through() {
        let formatted = format_analysis_prompt("short");
        assert!(formatted.contains("Content to analyze: short"));
    }

    #[test]
    fn test_metric_detail_prompt_embeds_all_parts() {
        let formatted =
            format_metric_detail_prompt("Retention", "B2B", "tracks weekly team activity");
        assert!(formatted.contains("For a B2B product that tracks weekly team activity"));
        assert!(formatted.contains("the metric 'Retention'"));
        assert!(formatted.contains("Example: [specific example for this product]"));
        assert!(formatted.contains("Explanation: [general explanation of the metric]"));
    }
}
