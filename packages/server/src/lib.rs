// Website Product-Metrics Analyzer - HTTP API
//
// Thin axum surface over the analysis library: request wiring, CORS and
// configuration live here; every analysis decision lives in `analysis`.

pub mod app;
pub mod config;
pub mod routes;

pub use app::{build_app, AppState};
pub use config::Config;
