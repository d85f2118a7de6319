// Router-level tests for the HTTP surface: request validation and error
// mapping, driven through the service without binding a socket.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use swaproxy::fetch::{FetchConfig, PageFetcher};
use swaproxy::replacer::WordSwap;
use swaproxy::server::{router, AppState};
use tower::ServiceExt;

fn test_app() -> axum::Router {
    let fetcher = PageFetcher::new(FetchConfig::default()).expect("fetcher should build");
    let swap = WordSwap::default_pair().expect("swap should build");
    router(AppState::new(fetcher, swap))
}

async fn post_fetch(body: Value) -> (StatusCode, Value) {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/fetch")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("request should build"),
        )
        .await
        .expect("request should be handled");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    let value = serde_json::from_slice(&bytes).expect("body should be JSON");
    (status, value)
}

#[tokio::test]
async fn test_missing_url_is_bad_request() {
    let (status, body) = post_fetch(json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "URL is required");
}

#[tokio::test]
async fn test_null_url_is_bad_request() {
    let (status, body) = post_fetch(json!({ "url": null })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "URL is required");
}

#[tokio::test]
async fn test_blank_url_is_bad_request() {
    for url in ["", "   "] {
        let (status, body) = post_fetch(json!({ "url": url })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "URL is required");
    }
}

#[tokio::test]
async fn test_malformed_url_is_server_error() {
    let (status, body) = post_fetch(json!({ "url": "not-a-valid-url" })).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let error = body["error"].as_str().expect("error should be a string");
    assert!(error.starts_with("Failed to fetch content:"));
    assert!(error.contains("not-a-valid-url"));
}

#[tokio::test]
async fn test_non_http_scheme_is_server_error() {
    let (status, body) = post_fetch(json!({ "url": "ftp://example.com/page" })).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let error = body["error"].as_str().expect("error should be a string");
    assert!(error.contains("only http and https"));
}

#[tokio::test]
async fn test_health_check() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .expect("request should build"),
        )
        .await
        .expect("request should be handled");

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    let body: Value = serde_json::from_slice(&bytes).expect("body should be JSON");

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["uptime_seconds"].is_u64());
}

#[tokio::test]
async fn test_landing_page_is_served() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/")
                .body(Body::empty())
                .expect("request should build"),
        )
        .await
        .expect("request should be handled");

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .expect("content type should be set")
        .to_str()
        .expect("content type should be ascii")
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    let page = String::from_utf8(bytes.to_vec()).expect("page should be UTF-8");
    assert!(page.contains("swaproxy"));
    assert!(page.contains("/fetch"));
}
