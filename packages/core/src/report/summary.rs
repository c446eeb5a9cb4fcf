use serde::{Deserialize, Serialize};

use super::calculator::{floor_percent, PerBlockFeeReport};
use super::ReportConfig;

/// Totals across every block of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalFeeSummary {
    pub block_count: u64,
    /// Sum of declared transaction counts.
    pub total_txn_count: u64,
    pub total_low_fee_txn_count: u64,
    pub total_low_sat_per_byte_count: u64,
    pub low_fee_percent: u64,
    pub low_sat_per_byte_percent: u64,
}

impl GlobalFeeSummary {
    pub fn from_reports(reports: &[PerBlockFeeReport]) -> Self {
        let mut summary = reports.iter().fold(Self::default(), |mut acc, report| {
            // Declared counts come from upstream; saturate instead of overflowing.
            acc.block_count = acc.block_count.saturating_add(1);
            acc.total_txn_count = acc.total_txn_count.saturating_add(report.txn_count);
            acc.total_low_fee_txn_count =
                acc.total_low_fee_txn_count.saturating_add(report.low_fee_txn_count);
            acc.total_low_sat_per_byte_count = acc
                .total_low_sat_per_byte_count
                .saturating_add(report.low_sat_per_byte_count);
            acc
        });

        summary.low_fee_percent =
            floor_percent(summary.total_low_fee_txn_count, summary.total_txn_count);
        summary.low_sat_per_byte_percent =
            floor_percent(summary.total_low_sat_per_byte_count, summary.total_txn_count);
        summary
    }

    pub fn summary_line(&self, config: &ReportConfig) -> String {
        format!(
            "In the last {} blocks,\n\
             {}% of all txns ({} / {}) were made with a total fee of < {} sats\n\
             {}% of all txns ({} / {}) were made with a fee rate of < {} sats/byte",
            self.block_count,
            self.low_fee_percent,
            self.total_low_fee_txn_count,
            self.total_txn_count,
            config.low_absolute_fee_threshold,
            self.low_sat_per_byte_percent,
            self.total_low_sat_per_byte_count,
            self.total_txn_count,
            config.low_fee_rate_threshold,
        )
    }
}
