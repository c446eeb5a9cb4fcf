use tracing::{info, warn};

use crate::explorer::{BlockExplorer, ExplorerError, Transaction};

/// Number of page requests needed to cover `tx_count` transactions.
pub fn page_count(tx_count: u64, page_size: u64) -> u64 {
    tx_count.div_ceil(page_size.max(1))
}

/// Fetch every transaction of one block, one page at a time.
///
/// Pages are requested at offsets `0, page_size, 2 * page_size, …` and
/// concatenated in request order. An empty page before the last computed
/// offset ends pagination early; the caller sees fewer transactions than
/// `tx_count`. Any failed page fails the whole block.
///
/// `page_size` must equal the explorer's own page size (25 for Esplora).
/// A larger page than expected is logged, since the offsets then overlap.
pub async fn fetch_block_transactions(
    explorer: &dyn BlockExplorer,
    block_id: &str,
    tx_count: u64,
    page_size: u64,
) -> Result<Vec<Transaction>, ExplorerError> {
    let page_size = page_size.max(1);
    let requests = page_count(tx_count, page_size);
    info!(block_id, tx_count, requests, "fetching transactions for block");

    let mut transactions = Vec::new();
    for page in 0..requests {
        let start_index = page * page_size;
        let batch = explorer
            .list_transaction_page(block_id, Some(start_index))
            .await?;

        if batch.len() as u64 > page_size {
            warn!(
                block_id,
                start_index,
                returned = batch.len(),
                page_size,
                "explorer page larger than configured page size; pages will overlap"
            );
        }
        if batch.is_empty() {
            warn!(
                block_id,
                start_index,
                fetched = transactions.len(),
                "empty transaction page, stopping pagination early"
            );
            break;
        }
        transactions.extend(batch);
    }

    Ok(transactions)
}
