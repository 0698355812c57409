// Main entry point for the analyzer API server

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use analysis::fetchers::{HttpFetcher, ValidatedFetcher};
use analysis::{Analyzer, OpenAi};
use server_core::{build_app, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,analysis=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting website product-metrics analyzer API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Wire collaborators: SSRF-validated fetcher + OpenAI-backed generation
    let fetcher = Arc::new(ValidatedFetcher::new(HttpFetcher::new()));
    let ai = Arc::new(OpenAi::new(config.openai_api_key.clone()).with_model(config.openai_model.clone()));
    let analyzer = Arc::new(Analyzer::new(fetcher, ai));

    // Build application
    let app = build_app(analyzer, &config.allowed_origins);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
