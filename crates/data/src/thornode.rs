//! [`SnapshotProvider`] backed by the THORNode REST API.

use crate::dto::{PoolDto, StreamingSwapDto, TxDetail, TxStatusDto};
use crate::provider::SnapshotProvider;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::env;
use std::time::Duration;
use streamscope_domain::entities::{PoolState, StreamingSwapRecord};
use tracing::debug;

/// Public Nine Realms THORNode endpoint.
pub const DEFAULT_THORNODE_URL: &str = "https://thornode.ninerealms.com/thorchain";

/// Connection settings for [`ThornodeProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// API root, without a trailing slash. Default [`DEFAULT_THORNODE_URL`].
    pub base_url: String,
    /// Per-request timeout in seconds. Default 10.
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_THORNODE_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

impl ProviderConfig {
    /// Reads `THORNODE_URL` and `THORNODE_TIMEOUT_SECS`, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env::var("THORNODE_URL").unwrap_or(defaults.base_url),
            timeout_secs: env::var("THORNODE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// THORNode REST client.
#[derive(Debug, Clone)]
pub struct ThornodeProvider {
    client: reqwest::Client,
    config: ProviderConfig,
}

impl ThornodeProvider {
    /// Creates a provider.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!(%url, "GET");
        let body = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("request to {url} failed"))?
            .error_for_status()
            .with_context(|| format!("{url} returned an error status"))?
            .json::<T>()
            .await
            .with_context(|| format!("invalid JSON from {url}"))?;
        Ok(body)
    }
}

#[async_trait]
impl SnapshotProvider for ThornodeProvider {
    async fn fetch_pools(&self) -> Result<Vec<PoolState>> {
        let pools: Vec<PoolDto> = self.get_json("pools").await?;
        debug!(count = pools.len(), "Fetched pools");
        Ok(pools.into_iter().map(PoolState::from).collect())
    }

    async fn fetch_streaming_swaps(&self) -> Result<Vec<StreamingSwapRecord>> {
        let swaps: Vec<StreamingSwapDto> = self.get_json("swaps/streaming").await?;
        debug!(count = swaps.len(), "Fetched streaming swaps");
        Ok(swaps.into_iter().map(StreamingSwapRecord::from).collect())
    }

    async fn fetch_tx_detail(&self, tx_id: &str) -> Result<TxDetail> {
        let status: TxStatusDto = self.get_json(&format!("tx/status/{tx_id}")).await?;
        Ok(status.into())
    }
}
