//! HTTP client for the quote feed
//!
//! Issues one GET per call and decodes the `data` array of the response.

use super::types::TickersResponse;
use crate::domain::QuoteBatch;
use async_trait::async_trait;
use hyperpoll::{Fetcher, HyperPollError};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Default feed endpoint
pub const FEED_URL: &str = "https://futures-api.poloniex.com/api/v2/tickers";

/// Default request timeout when none is configured
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("API error ({status}): {body}")]
    ApiError { status: u16, body: String },

    #[error("Deserialization failed: {0}")]
    DeserializeFailed(String),
}

pub type Result<T> = std::result::Result<T, FeedError>;

/// Feed client for the tickers endpoint
pub struct QuoteFeedClient {
    url: String,
    timeout: Duration,
    client: Client,
}

impl QuoteFeedClient {
    /// Create a client for the default endpoint
    pub fn new() -> Result<Self> {
        Self::with_url(FEED_URL)
    }

    /// Create a client for a custom endpoint
    pub fn with_url(url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(url, DEFAULT_TIMEOUT)
    }

    /// Create a client for a custom endpoint with a request timeout
    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(10)))
            .pool_idle_timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(2)
            .tcp_keepalive(Duration::from_secs(15))
            .build()?;

        Ok(Self {
            url: url.into(),
            timeout,
            client,
        })
    }

    /// Get the endpoint URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch one batch of quotes
    ///
    /// # Returns
    /// The records of the `data` array, in the order received
    pub async fn get_tickers(&self) -> Result<QuoteBatch> {
        debug!("GET {}", self.url);

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(FeedError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let parsed: TickersResponse = serde_json::from_str(&body)
            .map_err(|e| FeedError::DeserializeFailed(e.to_string()))?;

        debug!(
            "Fetched {} quotes (code {})",
            parsed.data.len(),
            parsed.code.as_deref().unwrap_or("-")
        );
        Ok(parsed.data)
    }

    fn to_poll_error(&self, error: FeedError) -> HyperPollError {
        match error {
            FeedError::RequestFailed(e) if e.is_timeout() => HyperPollError::Timeout(self.timeout),
            FeedError::RequestFailed(e) if e.is_decode() => HyperPollError::Payload(e.to_string()),
            FeedError::RequestFailed(e) => HyperPollError::Transport(e.to_string()),
            FeedError::ApiError { status, body } => HyperPollError::Status { status, body },
            FeedError::DeserializeFailed(msg) => HyperPollError::Payload(msg),
        }
    }
}

#[async_trait]
impl Fetcher for QuoteFeedClient {
    type Output = QuoteBatch;

    async fn fetch(&self) -> hyperpoll::Result<QuoteBatch> {
        self.get_tickers().await.map_err(|e| self.to_poll_error(e))
    }
}
