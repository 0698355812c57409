//! Website analysis endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use serde_json::json;

use analysis::Analysis;

use crate::app::AppState;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub url: Option<String>,
}

/// Either a full analysis or the structured error shape.
///
/// Gate rejections and upstream failures both ride inside the `result`
/// envelope; HTTP status stays 200 so the caller always gets exactly one
/// of these shapes instead of a raw failure.
#[derive(Serialize)]
#[serde(untagged)]
pub enum AnalyzeResult {
    Analysis(Analysis),
    Error { error: String, message: String },
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub result: AnalyzeResult,
}

/// `POST /analyze` and `POST /api/analyze`
///
/// Body: `{ "url": "https://..." }`. Responds 400 when the url is missing,
/// otherwise 200 with `{ "result": ... }`.
pub async fn analyze_handler(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> impl IntoResponse {
    let Some(url) = request.url.filter(|u| !u.trim().is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "URL is required" })),
        )
            .into_response();
    };

    let result = match state.analyzer.analyze(&url).await {
        Ok(analysis) => AnalyzeResult::Analysis(analysis),
        Err(error) => {
            tracing::warn!(url = %url, kind = error.kind(), error = %error, "analysis failed");
            AnalyzeResult::Error {
                error: error.kind().to_string(),
                message: error.message(),
            }
        }
    };

    Json(AnalyzeResponse { result }).into_response()
}
