use async_trait::async_trait;

use super::{Block, ExplorerError, Transaction};

/// Read-only access to a block explorer.
///
/// Each call performs exactly one request against the remote service.
/// Implementations must not retry; failures go straight back to the caller.
#[async_trait]
pub trait BlockExplorer: Send + Sync {
    /// The most recent batch of blocks, or the batch below `before_height`
    /// when one is given. Batch size is chosen by the service.
    async fn list_recent_blocks(
        &self,
        before_height: Option<u64>,
    ) -> Result<Vec<Block>, ExplorerError>;

    /// One page of transactions for `block_id`, starting at `start_index`
    /// (first page when `None`). Page size is chosen by the service.
    async fn list_transaction_page(
        &self,
        block_id: &str,
        start_index: Option<u64>,
    ) -> Result<Vec<Transaction>, ExplorerError>;

    /// Human-readable provider name, used in logs.
    fn provider_name(&self) -> &str;
}
