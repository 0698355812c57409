//! Fetcher implementations.

pub mod http;
pub mod mock;
pub mod validate;

pub use http::HttpFetcher;
pub use mock::MockFetcher;
pub use validate::{UrlValidator, ValidatedFetcher};
