//! Testing utilities including mock implementations.
//!
//! Useful for testing applications that use the analysis library without
//! making real generative-model or network calls.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::{GenerationError, GenerationResult};
use crate::traits::ai::Ai;

/// A mock Ai implementation for testing.
///
/// Responses are canned and matched by prompt substring, in the order they
/// were registered; a prompt matching no needle returns the default
/// response (empty unless configured). Failure needles simulate provider
/// errors for specific prompts.
///
/// # Example
///
/// ```rust
/// use analysis::testing::MockAi;
///
/// let ai = MockAi::new()
///     .with_response("Business type", "Business type: B2B\nMetrics:\n1. Retention")
///     .with_failure("'Churn'");
/// ```
#[derive(Default)]
pub struct MockAi {
    /// (needle, response) pairs checked in registration order
    responses: Arc<RwLock<Vec<(String, String)>>>,

    /// Response for prompts matching no needle
    default_response: Arc<RwLock<String>>,

    /// Needles whose prompts fail with a provider error
    failures: Arc<RwLock<Vec<String>>>,

    /// Prompts received, in call order
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockAi {
    /// Create a mock with no canned responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a canned response for prompts containing `needle`.
    pub fn with_response(self, needle: impl Into<String>, response: impl Into<String>) -> Self {
        self.responses
            .write()
            .unwrap()
            .push((needle.into(), response.into()));
        self
    }

    /// Set the response for prompts matching no registered needle.
    pub fn with_default_response(self, response: impl Into<String>) -> Self {
        *self.default_response.write().unwrap() = response.into();
        self
    }

    /// Make prompts containing `needle` fail with a provider error.
    pub fn with_failure(self, needle: impl Into<String>) -> Self {
        self.failures.write().unwrap().push(needle.into());
        self
    }

    /// Prompts received so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    /// Number of completion calls made.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    /// Clear recorded calls.
    pub fn clear_calls(&self) {
        self.calls.write().unwrap().clear();
    }
}

impl Clone for MockAi {
    fn clone(&self) -> Self {
        Self {
            responses: Arc::clone(&self.responses),
            default_response: Arc::clone(&self.default_response),
            failures: Arc::clone(&self.failures),
            calls: Arc::clone(&self.calls),
        }
    }
}

#[async_trait]
impl Ai for MockAi {
    async fn complete(&self, prompt: &str) -> GenerationResult<String> {
        self.calls.write().unwrap().push(prompt.to_string());

        if self
            .failures
            .read()
            .unwrap()
            .iter()
            .any(|needle| prompt.contains(needle))
        {
            return Err(GenerationError::Provider("mock failure".to_string()));
        }

        for (needle, response) in self.responses.read().unwrap().iter() {
            if prompt.contains(needle) {
                return Ok(response.clone());
            }
        }

        Ok(self.default_response.read().unwrap().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_matches_by_substring_in_order() {
        let ai = MockAi::new()
            .with_response("alpha", "first")
            .with_response("beta", "second");

        assert_eq!(ai.complete("contains alpha here").await.unwrap(), "first");
        assert_eq!(ai.complete("beta only").await.unwrap(), "second");
        assert_eq!(ai.complete("neither").await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_default_response() {
        let ai = MockAi::new().with_default_response("fallback text");
        assert_eq!(ai.complete("anything").await.unwrap(), "fallback text");
    }

    #[tokio::test]
    async fn test_failure_needle_errors() {
        let ai = MockAi::new().with_failure("boom");
        let err = ai.complete("this goes boom").await.unwrap_err();
        assert!(matches!(err, GenerationError::Provider(_)));
    }

    #[tokio::test]
    async fn test_call_recording() {
        let ai = MockAi::new();
        ai.complete("one").await.unwrap();
        ai.complete("two").await.unwrap();

        assert_eq!(ai.call_count(), 2);
        assert_eq!(ai.calls(), vec!["one".to_string(), "two".to_string()]);

        ai.clear_calls();
        assert_eq!(ai.call_count(), 0);
    }
}
