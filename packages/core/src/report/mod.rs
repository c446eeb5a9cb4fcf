//! Fee report pipeline
//!
//! Walks the most recent blocks one at a time, pages through each block's
//! transactions, and counts low-fee and low-fee-rate transactions.

pub mod aggregator;
pub mod calculator;
pub mod config;
pub mod pagination;
pub mod summary;

pub use aggregator::{build_block_reports, run_startup_report};
pub use calculator::{calculate_block_report, fee_per_byte, PerBlockFeeReport};
pub use config::ReportConfig;
pub use pagination::{fetch_block_transactions, page_count};
pub use summary::GlobalFeeSummary;
