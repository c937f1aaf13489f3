use super::FundingSource;
use crate::config::ClientConfig;
use crate::errors::ClientError;
use crate::models::FundingRatesSnapshot;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};

pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the `/funding` endpoint.
///
/// The underlying reqwest client keeps its connection pool for the lifetime
/// of this value.
pub struct FundingClient {
    config: ClientConfig,
    client: reqwest::Client,
}

impl FundingClient {
    /// Client against the public API with the default timeout.
    pub fn new() -> Result<Self, ClientError> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl FundingSource for FundingClient {
    /// GETs `{base_url}/funding` and parses the body. Non-2xx statuses are
    /// reported before the body is parsed.
    async fn fetch_snapshot(&self) -> Result<FundingRatesSnapshot, ClientError> {
        let url = self.config.funding_url();
        tracing::debug!("fetching funding rates from {url}");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!("could not read error body from {url}: {e}");
                    String::new()
                }
            };
            tracing::warn!("funding request to {url} failed: {status}");
            return Err(ClientError::Status { status, body });
        }

        let bytes = response.bytes().await?;
        let snapshot: FundingRatesSnapshot = serde_json::from_slice(&bytes)?;

        tracing::debug!(
            "received {} symbols, {} exchanges with rates (ts={})",
            snapshot.symbol_count(),
            snapshot.funding_rates.len(),
            snapshot.timestamp
        );

        Ok(snapshot)
    }
}
