//! Esplora REST client
//!
//! Talks to an Esplora-compatible explorer (e.g. `https://blockstream.info/api`)
//! over plain HTTP GET. One request per call, no retries.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::explorer::{Block, BlockExplorer, ExplorerError, Transaction};

pub const DEFAULT_BASE_URL: &str = "https://blockstream.info/api";

pub struct EsploraClient {
    base_url: String,
    http: Client,
}

impl EsploraClient {
    /// Build a client with its own connection pool.
    pub fn new(base_url: &str) -> Result<Self, ExplorerError> {
        let http = Client::builder()
            .user_agent(concat!("block-fee-report/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ExplorerError::transport(format!("failed to build HTTP client: {}", e)))?;
        Self::with_client(http, base_url)
    }

    /// Reuse an existing reqwest client.
    pub fn with_client(http: Client, base_url: &str) -> Result<Self, ExplorerError> {
        Url::parse(base_url).map_err(|e| ExplorerError::InvalidBaseUrl {
            message: format!("{:?}: {}", base_url, e),
        })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn blocks_url(&self, before_height: Option<u64>) -> String {
        match before_height {
            Some(height) => format!("{}/blocks/{}", self.base_url, height),
            None => format!("{}/blocks", self.base_url),
        }
    }

    fn transactions_url(&self, block_id: &str, start_index: Option<u64>) -> String {
        match start_index {
            Some(start) => format!("{}/block/{}/txs/{}", self.base_url, block_id, start),
            None => format!("{}/block/{}/txs", self.base_url, block_id),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ExplorerError> {
        debug!(url = %url, "explorer request");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ExplorerError::transport(format!("GET {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            debug!(url = %url, status = %status, "explorer request rejected");
            return Err(ExplorerError::transport(format!(
                "GET {} returned {}",
                url, status
            )));
        }

        let body = response.bytes().await.map_err(|e| {
            ExplorerError::transport(format!("reading body of {} failed: {}", url, e))
        })?;

        serde_json::from_slice(&body)
            .map_err(|e| ExplorerError::upstream_data(format!("GET {}: {}", url, e)))
    }
}

#[async_trait]
impl BlockExplorer for EsploraClient {
    async fn list_recent_blocks(
        &self,
        before_height: Option<u64>,
    ) -> Result<Vec<Block>, ExplorerError> {
        let blocks: Vec<Block> = self.get_json(&self.blocks_url(before_height)).await?;
        for block in &blocks {
            block.validate()?;
        }
        Ok(blocks)
    }

    async fn list_transaction_page(
        &self,
        block_id: &str,
        start_index: Option<u64>,
    ) -> Result<Vec<Transaction>, ExplorerError> {
        self.get_json(&self.transactions_url(block_id, start_index))
            .await
    }

    fn provider_name(&self) -> &str {
        "Esplora"
    }
}
