//! Typed errors for the analysis library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Top-level errors for a website analysis request.
///
/// Only failures that short-circuit the whole request live here. A failed
/// metric-detail call is absorbed inside the enricher and never surfaces as
/// an `AnalysisError`.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The product gate rejected the page.
    #[error("{message}")]
    NotProductCompany { message: String },

    /// Fetching the page failed.
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// The whole-page analysis call failed.
    #[error("analysis call failed: {0}")]
    Generation(#[from] GenerationError),
}

impl AnalysisError {
    /// Stable machine-readable error kind for the wire shape
    /// `{ "error": kind, "message": ... }`.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::NotProductCompany { .. } => "not_product_company",
            AnalysisError::Fetch(_) => "fetch_error",
            AnalysisError::Generation(_) => "analysis_error",
        }
    }

    /// Caller-visible message for the wire shape.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Errors from fetching a page over the network.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Security validation failed
    #[error("security error: {0}")]
    Security(#[from] SecurityError),

    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Non-2xx response
    #[error("HTTP {status} fetching {url}")]
    Status { url: String, status: u16 },

    /// Invalid URL format
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },

    /// Request deadline expired; treated like any other fetch failure
    #[error("timeout fetching {url}")]
    Timeout { url: String },
}

/// Errors from the generative-text provider.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Provider returned a non-success status or error payload
    #[error("provider error: {0}")]
    Provider(String),

    /// Transport-level failure reaching the provider
    #[error("request failed: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Provider responded without any completion text
    #[error("no completion in response")]
    EmptyCompletion,

    /// Request deadline expired
    #[error("generation timed out")]
    Timeout,
}

/// Security-related errors, primarily for SSRF protection.
#[derive(Debug, Error)]
pub enum SecurityError {
    /// URL scheme not allowed (e.g., file://, ftp://)
    #[error("disallowed URL scheme: {0}")]
    DisallowedScheme(String),

    /// Host is blocked (e.g., localhost, internal IPs)
    #[error("blocked host: {0}")]
    BlockedHost(String),

    /// IP in blocked CIDR range (e.g., 10.0.0.0/8)
    #[error("blocked IP range: {0}")]
    BlockedCidr(String),

    /// URL has no host
    #[error("URL has no host")]
    NoHost,

    /// DNS resolution failed
    #[error("DNS resolution failed: {0}")]
    DnsResolution(String),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Result type alias for generation operations.
pub type GenerationResult<T> = std::result::Result<T, GenerationError>;

/// Result type alias for security checks.
pub type SecurityResult<T> = std::result::Result<T, SecurityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let gate = AnalysisError::NotProductCompany {
            message: "not a product site".to_string(),
        };
        assert_eq!(gate.kind(), "not_product_company");
        assert_eq!(gate.message(), "not a product site");

        let fetch = AnalysisError::Fetch(FetchError::Status {
            url: "https://example.com".to_string(),
            status: 503,
        });
        assert_eq!(fetch.kind(), "fetch_error");
        assert!(fetch.message().contains("503"));

        let generation = AnalysisError::Generation(GenerationError::EmptyCompletion);
        assert_eq!(generation.kind(), "analysis_error");
    }
}
