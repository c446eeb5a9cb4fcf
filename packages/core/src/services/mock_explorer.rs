//! Mock block explorer for testing
//!
//! Implements `BlockExplorer` with configurable responses so tests can
//! exercise pagination, the report pipeline, and API handlers without a
//! live Esplora instance.
//!
//! Gated behind `#[cfg(test)]` — never compiled into production builds.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::explorer::{Block, BlockExplorer, ExplorerError, Transaction};

/// One request observed by the mock, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockRequest {
    Blocks { before_height: Option<u64> },
    Page { block_id: String, start_index: Option<u64> },
}

/// A configurable mock implementation of `BlockExplorer`.
///
/// # Example
/// ```ignore
/// let mock = MockExplorer::new()
///     .with_blocks(vec![block])
///     .with_transactions("aa11", txs, 25);
/// ```
pub struct MockExplorer {
    /// Blocks returned by `list_recent_blocks`.
    blocks: Vec<Block>,
    /// Pages keyed by `(block_id, start_index)`. Unknown keys yield an empty page.
    pages: HashMap<(String, u64), Vec<Transaction>>,
    /// When `Some`, `list_recent_blocks` returns this error instead of `blocks`.
    blocks_error: Option<ExplorerError>,
    /// Per-page errors, checked before `pages`.
    page_errors: HashMap<(String, u64), ExplorerError>,
    /// Every request received, in order.
    pub requests: Arc<Mutex<Vec<MockRequest>>>,
}

impl MockExplorer {
    /// Create a new mock with no blocks and no pages.
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            pages: HashMap::new(),
            blocks_error: None,
            page_errors: HashMap::new(),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_blocks(mut self, blocks: Vec<Block>) -> Self {
        self.blocks = blocks;
        self
    }

    /// Register a single page for `block_id` at `start_index`.
    pub fn with_page(mut self, block_id: &str, start_index: u64, txs: Vec<Transaction>) -> Self {
        self.pages.insert((block_id.to_string(), start_index), txs);
        self
    }

    /// Split `txs` into pages of `page_size` and register each one.
    pub fn with_transactions(mut self, block_id: &str, txs: Vec<Transaction>, page_size: usize) -> Self {
        for (i, chunk) in txs.chunks(page_size).enumerate() {
            let start = (i * page_size) as u64;
            self.pages.insert((block_id.to_string(), start), chunk.to_vec());
        }
        self
    }

    pub fn with_blocks_error(mut self, error: ExplorerError) -> Self {
        self.blocks_error = Some(error);
        self
    }

    pub fn with_page_error(mut self, block_id: &str, start_index: u64, error: ExplorerError) -> Self {
        self.page_errors.insert((block_id.to_string(), start_index), error);
        self
    }

    /// Snapshot of the requests seen so far.
    pub fn recorded(&self) -> Vec<MockRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Offsets requested for `block_id`, in order.
    pub fn page_offsets(&self, block_id: &str) -> Vec<Option<u64>> {
        self.recorded()
            .into_iter()
            .filter_map(|r| match r {
                MockRequest::Page { block_id: id, start_index } if id == block_id => Some(start_index),
                _ => None,
            })
            .collect()
    }

    fn record(&self, request: MockRequest) {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
    }
}

impl Default for MockExplorer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlockExplorer for MockExplorer {
    async fn list_recent_blocks(
        &self,
        before_height: Option<u64>,
    ) -> Result<Vec<Block>, ExplorerError> {
        self.record(MockRequest::Blocks { before_height });

        if let Some(ref err) = self.blocks_error {
            return Err(err.clone());
        }

        Ok(match before_height {
            Some(height) => self
                .blocks
                .iter()
                .filter(|b| b.height.map_or(true, |h| h < height))
                .cloned()
                .collect(),
            None => self.blocks.clone(),
        })
    }

    async fn list_transaction_page(
        &self,
        block_id: &str,
        start_index: Option<u64>,
    ) -> Result<Vec<Transaction>, ExplorerError> {
        self.record(MockRequest::Page {
            block_id: block_id.to_string(),
            start_index,
        });

        let key = (block_id.to_string(), start_index.unwrap_or(0));
        if let Some(err) = self.page_errors.get(&key) {
            return Err(err.clone());
        }

        Ok(self.pages.get(&key).cloned().unwrap_or_default())
    }

    fn provider_name(&self) -> &str {
        "MockExplorer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(fee: u64) -> Transaction {
        Transaction {
            txid: Some(format!("tx_{}", fee)),
            fee: Some(fee),
            weight: 400,
        }
    }

    fn block(id: &str, height: u64, tx_count: u64) -> Block {
        Block {
            id: id.into(),
            tx_count,
            height: Some(height),
        }
    }

    #[tokio::test]
    async fn returns_configured_blocks() {
        let mock = MockExplorer::new().with_blocks(vec![block("aa", 2, 1), block("bb", 1, 1)]);
        let blocks = mock.list_recent_blocks(None).await.unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].id, "aa");
    }

    #[tokio::test]
    async fn before_height_filters_blocks() {
        let mock = MockExplorer::new().with_blocks(vec![block("aa", 2, 1), block("bb", 1, 1)]);
        let blocks = mock.list_recent_blocks(Some(2)).await.unwrap();
        assert_eq!(blocks, vec![block("bb", 1, 1)]);
    }

    #[tokio::test]
    async fn splits_transactions_into_pages() {
        let txs: Vec<_> = (0..30).map(tx).collect();
        let mock = MockExplorer::new().with_transactions("aa", txs, 25);

        assert_eq!(mock.list_transaction_page("aa", Some(0)).await.unwrap().len(), 25);
        assert_eq!(mock.list_transaction_page("aa", Some(25)).await.unwrap().len(), 5);
        assert!(mock.list_transaction_page("aa", Some(50)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_start_index_reads_first_page() {
        let mock = MockExplorer::new().with_page("aa", 0, vec![tx(7)]);
        assert_eq!(mock.list_transaction_page("aa", None).await.unwrap(), vec![tx(7)]);
    }

    #[tokio::test]
    async fn returns_configured_errors() {
        let mock = MockExplorer::new()
            .with_blocks_error(ExplorerError::transport("down"))
            .with_page_error("aa", 25, ExplorerError::upstream_data("bad"));

        assert!(matches!(
            mock.list_recent_blocks(None).await,
            Err(ExplorerError::Transport { .. })
        ));
        assert!(matches!(
            mock.list_transaction_page("aa", Some(25)).await,
            Err(ExplorerError::UpstreamData { .. })
        ));
    }

    #[tokio::test]
    async fn records_requests_in_order_even_on_error() {
        let mock = MockExplorer::new().with_blocks_error(ExplorerError::transport("down"));

        let _ = mock.list_recent_blocks(None).await;
        let _ = mock.list_transaction_page("aa", Some(0)).await;

        assert_eq!(
            mock.recorded(),
            vec![
                MockRequest::Blocks { before_height: None },
                MockRequest::Page {
                    block_id: "aa".into(),
                    start_index: Some(0)
                },
            ]
        );
        assert_eq!(mock.page_offsets("aa"), vec![Some(0)]);
    }

    #[test]
    fn provider_name_is_mock_explorer() {
        assert_eq!(MockExplorer::new().provider_name(), "MockExplorer");
    }
}
