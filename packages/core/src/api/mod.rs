//! HTTP surface
//!
//! `/api/*` routes backed by the fee pipeline, an allow-list CORS layer, and
//! optional static file serving for the front-end bundle.

pub mod cors;
pub mod handlers;

use std::path::Path;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};

use crate::explorer::BlockExplorer;
use crate::report::ReportConfig;

pub use cors::cors_layer;

/// Shared per-process state. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub explorer: Arc<dyn BlockExplorer>,
    pub report_config: Arc<ReportConfig>,
}

/// Build the application router.
///
/// With `static_dir` set, non-API paths are served from that directory and
/// unknown ones fall back to its `index.html`. Unknown `/api/` paths always
/// get a JSON 404.
pub fn router(state: AppState, cors: CorsLayer, static_dir: Option<&Path>) -> Router {
    let api = Router::new()
        .route("/fetchBlockData", get(handlers::fetch_block_data))
        .route("/summary", get(handlers::fetch_summary))
        .fallback(handlers::api_not_found);

    let mut app = Router::new().nest("/api", api);
    if let Some(dir) = static_dir {
        let index = ServeFile::new(dir.join("index.html"));
        app = app.fallback_service(ServeDir::new(dir).fallback(index));
    }

    app.layer(cors).with_state(state)
}
