use tracing::{error, info, warn};

use super::{
    calculate_block_report, fetch_block_transactions, GlobalFeeSummary, PerBlockFeeReport,
    ReportConfig,
};
use crate::error::AppError;
use crate::explorer::BlockExplorer;

/// Build one report per block, in the order the explorer lists them.
///
/// Blocks are processed strictly one after another. The first failure
/// aborts the run and no reports are returned.
pub async fn build_block_reports(
    explorer: &dyn BlockExplorer,
    config: &ReportConfig,
    before_height: Option<u64>,
) -> Result<Vec<PerBlockFeeReport>, AppError> {
    let blocks = explorer.list_recent_blocks(before_height).await?;
    info!(
        provider = explorer.provider_name(),
        blocks = blocks.len(),
        ?before_height,
        "fetched block list"
    );

    let mut reports = Vec::with_capacity(blocks.len());
    for block in &blocks {
        let transactions =
            fetch_block_transactions(explorer, &block.id, block.tx_count, config.page_size)
                .await
                .map_err(|source| AppError::Aggregation {
                    block_id: block.id.clone(),
                    source,
                })?;

        let report = calculate_block_report(block, &transactions, config);
        if report.fetched_txn_count != report.txn_count {
            warn!(
                block_id = %block.id,
                declared = report.txn_count,
                fetched = report.fetched_txn_count,
                "fetched transaction count differs from declared count"
            );
        }
        info!("\n{}\n", report.summary_line(config));
        reports.push(report);
    }

    Ok(reports)
}

/// Run the pipeline once over the latest blocks and log the totals.
///
/// Failures are logged and swallowed so the server keeps running.
pub async fn run_startup_report(
    explorer: &dyn BlockExplorer,
    config: &ReportConfig,
) -> Option<GlobalFeeSummary> {
    match build_block_reports(explorer, config, None).await {
        Ok(reports) => {
            let summary = GlobalFeeSummary::from_reports(&reports);
            info!("\n{}", summary.summary_line(config));
            Some(summary)
        }
        Err(err) => {
            error!(kind = err.kind(), error = %err, "startup fee report failed");
            None
        }
    }
}
