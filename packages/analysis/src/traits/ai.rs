//! Ai trait for generative-text completions.

use async_trait::async_trait;

use crate::error::GenerationResult;

/// Ai trait for generative-text completions.
///
/// Implementations wrap a specific provider (OpenAI, Anthropic, etc.) and
/// handle transport and authentication. The pipeline only ever sends a
/// rendered prompt and reads back free text; prompt construction and
/// response parsing stay on the caller's side of this seam so the core can
/// be tested with a deterministic stub.
#[async_trait]
pub trait Ai: Send + Sync {
    /// Send a prompt and return the raw completion text.
    ///
    /// A single best-effort attempt: implementations must not retry, and
    /// should impose a bounded per-call timeout surfaced as
    /// [`GenerationError`](crate::error::GenerationError).
    async fn complete(&self, prompt: &str) -> GenerationResult<String>;
}
