use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ReportConfig;
use crate::explorer::{Block, Transaction};

/// Fee counters for a single block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerBlockFeeReport {
    pub low_fee_txn_count: u64,
    pub low_sat_per_byte_count: u64,
    pub block_id: String,
    /// Transaction count declared by the block listing.
    pub txn_count: u64,
    /// Transactions actually retrieved and inspected.
    pub fetched_txn_count: u64,
}

/// `ceil(fee / (weight / 4))`, computed as `ceil(fee * 4 / weight)` in
/// integers. `None` when `weight` is zero.
pub fn fee_per_byte(fee: u64, weight: u64) -> Option<u64> {
    if weight == 0 {
        return None;
    }
    let scaled = u128::from(fee) * 4;
    let weight = u128::from(weight);
    let rate = (scaled + weight - 1) / weight;
    Some(u64::try_from(rate).unwrap_or(u64::MAX))
}

/// `floor(count / total * 100)`, zero when `total` is zero.
pub fn floor_percent(count: u64, total: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    u64::try_from(u128::from(count) * 100 / u128::from(total)).unwrap_or(u64::MAX)
}

/// Count the block's low-fee and low-fee-rate transactions.
///
/// Transactions without a fee are ignored entirely. A zero weight has no
/// meaningful fee rate, so such a transaction only takes part in the
/// absolute-fee count.
pub fn calculate_block_report(
    block: &Block,
    transactions: &[Transaction],
    config: &ReportConfig,
) -> PerBlockFeeReport {
    let mut low_sat_per_byte_count = 0;
    let mut low_fee_txn_count = 0;

    for tx in transactions {
        let Some(fee) = tx.fee else {
            continue;
        };

        match fee_per_byte(fee, tx.weight) {
            Some(rate) if rate < config.low_fee_rate_threshold => low_sat_per_byte_count += 1,
            Some(_) => {}
            None => debug!(block_id = %block.id, txid = ?tx.txid, "zero weight, skipping fee rate"),
        }

        if fee < config.low_absolute_fee_threshold {
            low_fee_txn_count += 1;
        }
    }

    PerBlockFeeReport {
        low_fee_txn_count,
        low_sat_per_byte_count,
        block_id: block.id.clone(),
        txn_count: block.tx_count,
        fetched_txn_count: transactions.len() as u64,
    }
}

impl PerBlockFeeReport {
    pub fn low_fee_percent(&self) -> u64 {
        floor_percent(self.low_fee_txn_count, self.txn_count)
    }

    pub fn low_sat_per_byte_percent(&self) -> u64 {
        floor_percent(self.low_sat_per_byte_count, self.txn_count)
    }

    /// Multi-line log summary. Percentages use the declared transaction
    /// count, not the fetched one.
    pub fn summary_line(&self, config: &ReportConfig) -> String {
        format!(
            "In Block {}\n\
             {}% of all txns ({} / {}) were made with a total fee of < {} sats\n\
             {}% of all txns ({} / {}) were made with a fee rate of < {} sats/byte",
            self.block_id,
            self.low_fee_percent(),
            self.low_fee_txn_count,
            self.txn_count,
            config.low_absolute_fee_threshold,
            self.low_sat_per_byte_percent(),
            self.low_sat_per_byte_count,
            self.txn_count,
            config.low_fee_rate_threshold,
        )
    }
}
