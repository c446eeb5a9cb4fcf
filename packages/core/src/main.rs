use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use block_fee_report::{
    api::{self, AppState},
    cli::Cli,
    config::Config,
    error::AppError,
    explorer::BlockExplorer,
    logging,
    report::{self, ReportConfig},
    services::EsploraClient,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    let config = Config::from_cli(Cli::parse())?;
    logging::init(&config.log_level);

    let explorer: Arc<dyn BlockExplorer> = Arc::new(EsploraClient::new(&config.explorer_base_url)?);
    let report_config: Arc<ReportConfig> = Arc::new(config.report.clone());

    let state = AppState {
        explorer: Arc::clone(&explorer),
        report_config: Arc::clone(&report_config),
    };
    let app = api::router(
        state,
        api::cors_layer(&config.allowed_origins),
        config.static_dir.as_deref(),
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Unknown(format!("failed to bind {}: {}", addr, e)))?;
    info!(
        port = config.port,
        explorer = %config.explorer_base_url,
        "Server running"
    );

    // The startup report runs alongside the server, never in front of it.
    tokio::spawn(async move {
        report::run_startup_report(explorer.as_ref(), &report_config).await;
    });

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Unknown(format!("server error: {}", e)))
}
