//! Router-level tests with mock collaborators.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::util::ServiceExt;

use analysis::testing::MockAi;
use analysis::{Analyzer, MockFetcher};
use server_core::build_app;

const SITE: &str = "https://acme.example.com";

fn product_html() -> &'static str {
    "<html><head><title>Acme</title></head>\
     <body><p>pricing</p><p>demo</p><p>api</p></body></html>"
}

fn app_with(fetcher: MockFetcher, ai: MockAi) -> Router {
    let analyzer = Arc::new(Analyzer::new(Arc::new(fetcher), Arc::new(ai)));
    build_app(analyzer, &[])
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn analyze_request(path: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_missing_url_is_bad_request() {
    let app = app_with(MockFetcher::new(), MockAi::new());

    let response = app.oneshot(analyze_request("/analyze", "{}")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "URL is required");
}

#[tokio::test]
async fn test_empty_url_is_bad_request() {
    let app = app_with(MockFetcher::new(), MockAi::new());

    let response = app
        .oneshot(analyze_request("/analyze", r#"{"url": "  "}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_analyze_returns_three_metrics() {
    let fetcher = MockFetcher::new().with_page(SITE, product_html());
    let ai = MockAi::new()
        .with_response(
            "Based on this website content",
            "Business Type: B2B\nDescription: A tool\nMetrics:\n1. Retention\n2. Engagement\n3. Adoption",
        )
        .with_default_response("Example: e\nExplanation: x");
    let app = app_with(fetcher, ai);

    let body = format!(r#"{{"url": "{}"}}"#, SITE);
    let response = app
        .oneshot(analyze_request("/api/analyze", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["result"]["business_type"], "B2B");
    assert_eq!(json["result"]["description"], "A tool");
    assert_eq!(json["result"]["metrics"].as_array().unwrap().len(), 3);
    assert_eq!(json["result"]["metrics"][0]["name"], "Retention");
    assert_eq!(json["result"]["metrics"][0]["example"], "e");
    assert_eq!(json["result"]["metrics"][0]["tooltip"], "x");
}

#[tokio::test]
async fn test_gate_rejection_rides_in_result_envelope() {
    let fetcher = MockFetcher::new().with_page(
        SITE,
        "<html><body><p>A consulting firm with no relevant words.</p></body></html>",
    );
    let app = app_with(fetcher, MockAi::new());

    let body = format!(r#"{{"url": "{}"}}"#, SITE);
    let response = app.oneshot(analyze_request("/analyze", &body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["result"]["error"], "not_product_company");
    assert!(json["result"]["message"]
        .as_str()
        .unwrap()
        .contains(SITE));
}

#[tokio::test]
async fn test_fetch_failure_is_structured_error() {
    let fetcher = MockFetcher::new().with_failure(SITE);
    let app = app_with(fetcher, MockAi::new());

    let body = format!(r#"{{"url": "{}"}}"#, SITE);
    let response = app.oneshot(analyze_request("/analyze", &body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["result"]["error"], "fetch_error");
}

#[tokio::test]
async fn test_analysis_failure_is_structured_error() {
    let fetcher = MockFetcher::new().with_page(SITE, product_html());
    let ai = MockAi::new().with_failure("Based on this website content");
    let app = app_with(fetcher, ai);

    let body = format!(r#"{{"url": "{}"}}"#, SITE);
    let response = app.oneshot(analyze_request("/analyze", &body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["result"]["error"], "analysis_error");
}

#[tokio::test]
async fn test_suggest_filters_catalog() {
    let app = app_with(MockFetcher::new(), MockAi::new());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/suggest?q=slack")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let suggestions = json.as_array().unwrap();
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0]["url"], "https://slack.com");
    assert!(suggestions[0]["displayText"].as_str().unwrap().contains("Slack"));
}

#[tokio::test]
async fn test_suggest_short_query_is_empty() {
    let app = app_with(MockFetcher::new(), MockAi::new());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/suggest?q=s")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = app_with(MockFetcher::new(), MockAi::new());

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
}
