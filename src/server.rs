//! HTTP surface: landing page, health check, and the fetch-and-rewrite route.

use crate::fetch::PageFetcher;
use crate::replacer::WordSwap;
use crate::rewrite::rewrite_document;
use anyhow::Result;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Json},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application version
    pub version: String,
    /// Server start time
    pub start_time: std::time::Instant,
    /// Outbound page fetcher
    pub fetcher: Arc<PageFetcher>,
    /// Configured word swap
    pub swap: Arc<WordSwap>,
}

impl AppState {
    pub fn new(fetcher: PageFetcher, swap: WordSwap) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
            fetcher: Arc::new(fetcher),
            swap: Arc::new(swap),
        }
    }
}

/// Fetch-and-rewrite request
#[derive(Debug, Deserialize)]
pub struct FetchRequest {
    /// Page URL to fetch and transform
    pub url: Option<String>,
}

/// Fetch-and-rewrite response
#[derive(Debug, Serialize, Deserialize)]
pub struct FetchResponse {
    /// Whether the fetch and rewrite succeeded
    pub success: bool,
    /// Transformed document HTML
    pub content: String,
    /// Transformed document title (empty when the page has none)
    pub title: String,
    /// URL that was requested
    #[serde(rename = "originalUrl")]
    pub original_url: String,
}

/// Error body returned by failing routes
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Application version
    pub version: String,
    /// Uptime in seconds
    pub uptime_seconds: u64,
}

/// Build the application router with all routes attached.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/fetch", post(fetch_page))
        .with_state(Arc::new(state))
}

/// Bind and serve until shutdown.
pub async fn serve(addr: &str, state: AppState) -> Result<()> {
    let app = router(state);
    let listener = TcpListener::bind(addr).await?;

    info!("swaproxy listening on {}", listener.local_addr()?);
    info!("Available endpoints:");
    info!("  GET  / - Landing page");
    info!("  GET  /health - Health check");
    info!("  POST /fetch - Fetch a page and rewrite its text");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Minimal landing page exercising POST /fetch from a browser
async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

/// Health check endpoint
async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}

/// Fetch an upstream page, rewrite its visible text, and return the result.
async fn fetch_page(
    State(state): State<Arc<AppState>>,
    Json(request): Json<FetchRequest>,
) -> Result<Json<FetchResponse>, (StatusCode, Json<ErrorResponse>)> {
    let url = match request.url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => {
            return Err(error_response(
                StatusCode::BAD_REQUEST,
                "URL is required".to_string(),
            ))
        }
    };

    info!(url = %url, "Fetching page for rewrite");

    let page = state.fetcher.fetch(&url).await.map_err(|e| {
        error!(url = %url, error = %e, "Upstream fetch failed");
        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to fetch content: {e}"),
        )
    })?;

    let rewritten = rewrite_document(&page.body, &state.swap);

    info!(
        url = %url,
        bytes = rewritten.html.len(),
        "Rewrote fetched page"
    );

    Ok(Json(FetchResponse {
        success: true,
        content: rewritten.html,
        title: rewritten.title.unwrap_or_default(),
        original_url: url,
    }))
}

fn error_response(status: StatusCode, message: String) -> (StatusCode, Json<ErrorResponse>) {
    (status, Json(ErrorResponse { error: message }))
}

const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>swaproxy</title>
</head>
<body>
  <h1>swaproxy</h1>
  <p>Enter a page URL; its visible text comes back with the configured word swapped, casing preserved.</p>
  <form id="fetch-form">
    <input id="url" type="url" placeholder="https://example.com/" size="50" required>
    <button type="submit">Fetch</button>
  </form>
  <p id="status"></p>
  <iframe id="result" style="width: 100%; height: 70vh; border: 1px solid #ccc;"></iframe>
  <script>
    document.getElementById('fetch-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      const status = document.getElementById('status');
      status.textContent = 'Fetching...';
      const response = await fetch('/fetch', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ url: document.getElementById('url').value }),
      });
      const data = await response.json();
      if (response.ok) {
        status.textContent = data.title || 'Done';
        document.getElementById('result').srcdoc = data.content;
      } else {
        status.textContent = data.error;
      }
    });
  </script>
</body>
</html>
"#;
