//! Analysis pipeline: fetch → excerpt → gate → analyze → enrich → assemble.

pub mod assemble;
pub mod content;
pub mod enrich;
pub mod gate;
pub mod parse;
pub mod prompts;

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::AnalysisError;
use crate::traits::{ai::Ai, fetcher::Fetcher};
use crate::types::report::{Analysis, GateDecision};

/// Orchestrates a single website analysis.
///
/// Holds the two external collaborators behind their trait seams; every
/// other stage is a pure function. All state is request-scoped: nothing is
/// shared between `analyze` calls.
pub struct Analyzer {
    fetcher: Arc<dyn Fetcher>,
    ai: Arc<dyn Ai>,
}

impl Analyzer {
    /// Create an analyzer from its collaborators.
    pub fn new(fetcher: Arc<dyn Fetcher>, ai: Arc<dyn Ai>) -> Self {
        Self { fetcher, ai }
    }

    /// Analyze a website URL end to end.
    ///
    /// Short-circuits on a gate rejection or a failed fetch/analysis call;
    /// per-metric enrichment failures are absorbed downstream and the
    /// returned analysis always carries exactly three metrics.
    pub async fn analyze(&self, url: &str) -> Result<Analysis, AnalysisError> {
        let html = self.fetcher.fetch(url).await?;

        let excerpt = content::extract_excerpt(&html);
        debug!(
            url = %url,
            excerpt_len = excerpt.text.len(),
            meta_values = excerpt.meta_values.len(),
            "excerpt extracted"
        );

        if let GateDecision::Reject { message, .. } = gate::evaluate(&excerpt, url) {
            info!(url = %url, "gate rejected page");
            return Err(AnalysisError::NotProductCompany { message });
        }

        let prompt = prompts::format_analysis_prompt(&excerpt.text);
        let response = self.ai.complete(&prompt).await?;

        let parsed = parse::parse_analysis_response(&response);
        debug!(
            url = %url,
            business_type = %parsed.business_type,
            metrics = parsed.metrics.len(),
            "analysis response parsed"
        );

        let enriched = enrich::enrich_metrics(
            self.ai.as_ref(),
            &parsed.metrics,
            &parsed.business_type,
            &parsed.description,
        )
        .await;

        let analysis = assemble::assemble(parsed.business_type, parsed.description, enriched, url);
        info!(url = %url, "analysis complete");
        Ok(analysis)
    }
}
