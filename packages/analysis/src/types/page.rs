//! Page excerpt extracted from fetched HTML.

/// Bounded plain-text rendering of a fetched page.
///
/// Built once per request from the raw HTML and used for both the product
/// gate and the analysis prompt. The excerpt text is kept in full here;
/// truncation to the prompt budget happens at prompt-build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageExcerpt {
    /// Concatenated text of title/heading/paragraph elements, in document
    /// order, joined by single spaces.
    pub text: String,

    /// `content` values of `<meta name="description">` and
    /// `<meta name="keywords">` tags, in document order.
    pub meta_values: Vec<String>,
}

impl PageExcerpt {
    /// Create an excerpt from already-extracted parts.
    pub fn new(text: impl Into<String>, meta_values: Vec<String>) -> Self {
        Self {
            text: text.into(),
            meta_values,
        }
    }

    /// Check whether the excerpt carries any usable text at all.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.meta_values.iter().all(|v| v.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_detection() {
        let empty = PageExcerpt::new("  ", vec!["   ".to_string()]);
        assert!(empty.is_empty());

        let has_text = PageExcerpt::new("Hello", vec![]);
        assert!(!has_text.is_empty());

        let has_meta = PageExcerpt::new("", vec!["keywords here".to_string()]);
        assert!(!has_meta.is_empty());
    }
}
