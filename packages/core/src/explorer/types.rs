use serde::{Deserialize, Serialize};

use super::ExplorerError;

/// A block as listed by the explorer's `/blocks` resource.
///
/// Only the fields the fee pipeline needs are kept; anything else in the
/// response is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    pub tx_count: u64,
    #[serde(default)]
    pub height: Option<u64>,
}

impl Block {
    /// Reject blocks whose identifier cannot be used as a path segment.
    pub fn validate(&self) -> Result<(), ExplorerError> {
        if self.id.is_empty() {
            return Err(ExplorerError::upstream_data("block with empty id"));
        }
        if !self.id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ExplorerError::upstream_data(format!(
                "block id {:?} contains non-alphanumeric characters",
                self.id
            )));
        }
        Ok(())
    }
}

/// A transaction as returned by `/block/{hash}/txs/{start}`.
///
/// `fee` is `None` when the service reports it as null or leaves it out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default)]
    pub txid: Option<String>,
    #[serde(default)]
    pub fee: Option<u64>,
    pub weight: u64,
}
