use std::path::PathBuf;

use clap::Parser;

use crate::services::esplora::DEFAULT_BASE_URL;

/// Command-line arguments. Every flag can also come from the environment
/// (or a `.env` file).
#[derive(Debug, Parser)]
#[command(name = "block-fee-report", version, about = "Low-fee statistics over the latest blocks")]
pub struct Cli {
    /// Port the HTTP server listens on.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Base URL of the Esplora-compatible explorer API.
    #[arg(long, env = "EXPLORER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub explorer_url: String,

    /// Comma-separated list of origins allowed by CORS.
    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:8080,http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    /// Fee rate (sat/vB) below which a transaction counts as low fee rate.
    #[arg(long, env = "LOW_FEE_RATE_THRESHOLD", default_value_t = 4)]
    pub low_fee_rate_threshold: u64,

    /// Absolute fee (sats) below which a transaction counts as low fee.
    #[arg(long, env = "LOW_FEE_THRESHOLD", default_value_t = 10_000)]
    pub low_fee_threshold: u64,

    /// Transactions per explorer page. Must match the explorer's own page
    /// size (25 for Esplora), otherwise pages overlap.
    #[arg(long, env = "PAGE_SIZE", default_value_t = 25)]
    pub page_size: u64,

    /// Directory of front-end assets to serve. Disabled when unset.
    #[arg(long, env = "STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}
