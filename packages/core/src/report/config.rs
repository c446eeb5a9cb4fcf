/// Thresholds and paging parameters for one report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Transactions paying strictly less than this many sats per vbyte are
    /// counted as low fee rate.
    pub low_fee_rate_threshold: u64,
    /// Transactions paying strictly less than this many sats in total are
    /// counted as low fee.
    pub low_absolute_fee_threshold: u64,
    /// Transactions the explorer returns per page.
    pub page_size: u64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            low_fee_rate_threshold: 4,
            low_absolute_fee_threshold: 10_000,
            page_size: 25,
        }
    }
}
