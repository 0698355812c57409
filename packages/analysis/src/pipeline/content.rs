//! Content extraction from raw HTML.

use scraper::{Html, Selector};

use crate::types::page::PageExcerpt;

/// Extract a plain-text excerpt and meta values from raw HTML.
///
/// The excerpt is the text of every `<title>`, `<h1>`, `<h2>`, `<h3>` and
/// `<p>` element in document order, whitespace-normalized and joined by
/// single spaces. Meta values are the `content` attributes of
/// `<meta name="description">` and `<meta name="keywords">` tags.
///
/// This never fails: a malformed or empty document yields an empty excerpt.
/// No truncation happens here; the prompt budget is applied at
/// prompt-build time so the full excerpt stays available for the gate.
pub fn extract_excerpt(html: &str) -> PageExcerpt {
    let document = Html::parse_document(html);

    let text_selector =
        Selector::parse("title, h1, h2, h3, p").expect("static selector is valid");
    let meta_selector = Selector::parse(r#"meta[name="description"], meta[name="keywords"]"#)
        .expect("static selector is valid");

    let mut parts = Vec::new();
    for element in document.select(&text_selector) {
        let text = element.text().collect::<Vec<_>>().join(" ");
        let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if !normalized.is_empty() {
            parts.push(normalized);
        }
    }

    let meta_values = document
        .select(&meta_selector)
        .filter_map(|element| element.value().attr("content"))
        .map(|content| content.to_string())
        .collect();

    PageExcerpt {
        text: parts.join(" "),
        meta_values,
    }
}
