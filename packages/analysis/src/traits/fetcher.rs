//! Fetcher trait for retrieving page HTML.

use async_trait::async_trait;

use crate::error::FetchResult;

/// Fetcher trait for retrieving the raw HTML of a page.
///
/// Implementations fetch a single URL and return the response body as-is.
/// A non-2xx status or transport failure is an error; the core treats it as
/// a terminal analysis failure and does not retry.
///
/// # SSRF protection
///
/// Wrap URL-based fetchers with
/// [`ValidatedFetcher`](crate::fetchers::ValidatedFetcher) in production so
/// every URL is validated before the request is made.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch a URL and return the raw HTML text.
    async fn fetch(&self, url: &str) -> FetchResult<String>;
}
