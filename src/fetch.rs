use reqwest::{Client, Url};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Configuration for outbound page fetches
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Upstream request timeout
    pub timeout: Duration,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(15),
            user_agent: format!("swaproxy/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors from fetching an upstream page.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("unsupported URL scheme '{scheme}': only http and https are fetched")]
    UnsupportedScheme { scheme: String },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("upstream returned HTTP {status} for {url}")]
    UpstreamStatus { status: u16, url: String },
}

/// A successfully fetched page body.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub url: String,
    pub body: String,
}

/// HTTP client for retrieving the document to transform.
///
/// Built once at startup and shared across requests; holds no per-request
/// state. No retry or backoff: one request in, one response out.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Creates a fetcher from configuration.
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()?;

        Ok(Self { client })
    }

    /// Fetches `url` and returns the decoded body text.
    ///
    /// The URL must parse and use http or https; any non-2xx upstream
    /// status is an error.
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FetchError::UnsupportedScheme {
                scheme: parsed.scheme().to_string(),
            });
        }

        debug!(url = %parsed, "Requesting upstream page");
        let response = self.client.get(parsed.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::UpstreamStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        info!(url = %parsed, bytes = body.len(), "Fetched upstream page");

        Ok(FetchedPage {
            url: url.to_string(),
            body,
        })
    }
}
