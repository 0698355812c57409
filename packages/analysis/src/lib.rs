//! Website Product-Metrics Analysis Library
//!
//! Fetches a website, decides heuristically whether it represents a product
//! business, and uses a generative text model to produce a business
//! classification, a product description, and exactly three enriched
//! success metrics.
//!
//! # Design Philosophy
//!
//! - Heuristics gate before any model call is spent
//! - Free-text model output is parsed leniently, never rejected
//! - Malformed or missing output degrades to documented defaults
//! - Collaborators sit behind narrow traits so the core tests with stubs
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use analysis::{Analyzer, OpenAi};
//! use analysis::fetchers::{HttpFetcher, ValidatedFetcher};
//!
//! let fetcher = Arc::new(ValidatedFetcher::new(HttpFetcher::new()));
//! let ai = Arc::new(OpenAi::from_env()?);
//! let analyzer = Analyzer::new(fetcher, ai);
//!
//! let analysis = analyzer.analyze("https://example.com").await?;
//! assert_eq!(analysis.metrics.len(), 3);
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Core trait abstractions (Ai, Fetcher)
//! - [`types`] - Request-scoped data types
//! - [`pipeline`] - Gate, prompts, parsers, enrichment and assembly
//! - [`fetchers`] - Fetcher implementations (HttpFetcher, MockFetcher)
//! - [`ai`] - Ai implementations (OpenAi)
//! - [`testing`] - Mock implementations for testing

pub mod ai;
pub mod error;
pub mod fetchers;
pub mod pipeline;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{AnalysisError, FetchError, GenerationError, SecurityError};
pub use traits::{ai::Ai, fetcher::Fetcher};
pub use types::{
    page::PageExcerpt,
    report::{Analysis, EnrichedMetric, GateDecision, ParsedAnalysis, RawMetric},
};

// Re-export the pipeline entry point and its stages
pub use pipeline::Analyzer;
pub use pipeline::{
    assemble::{assemble, default_metrics, METRIC_COUNT},
    content::extract_excerpt,
    enrich::enrich_metrics,
    gate::{evaluate, keyword_count, ADMIT_THRESHOLD, PRODUCT_KEYWORDS},
    parse::{parse_analysis_response, parse_metric_detail, MetricDetail},
    prompts::{format_analysis_prompt, format_metric_detail_prompt, EXCERPT_PROMPT_BUDGET},
};

// Re-export implementations
pub use ai::OpenAi;
pub use fetchers::{HttpFetcher, MockFetcher, UrlValidator, ValidatedFetcher};

// Re-export testing utilities
pub use testing::MockAi;
