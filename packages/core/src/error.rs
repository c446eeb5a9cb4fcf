use std::error::Error;
use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::explorer::ExplorerError;

/// Unified application error.
///
/// Every failure in a report run ends up here unchanged; nothing is retried
/// or recovered along the way.
#[derive(Debug)]
pub enum AppError {
    Config(String),
    /// A request outside any per-block step failed (e.g. the block list).
    Explorer(ExplorerError),
    /// Fetching or reducing one block's transactions failed.
    Aggregation {
        block_id: String,
        source: ExplorerError,
    },
    Unknown(String),
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Config(_) => "config",
            AppError::Explorer(err) => err.kind(),
            AppError::Aggregation { .. } => "aggregation",
            AppError::Unknown(_) => "unknown",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Explorer(_) => StatusCode::BAD_GATEWAY,
            AppError::Aggregation { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Config error: {}", msg),
            AppError::Explorer(err) => write!(f, "Explorer error: {}", err),
            AppError::Aggregation { block_id, source } => {
                write!(f, "Aggregation error in block {}: {}", block_id, source)
            }
            AppError::Unknown(msg) => write!(f, "Unknown error: {}", msg),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AppError::Explorer(err) => Some(err),
            AppError::Aggregation { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ExplorerError> for AppError {
    fn from(err: ExplorerError) -> Self {
        match err {
            ExplorerError::InvalidBaseUrl { .. } => AppError::Config(err.to_string()),
            other => AppError::Explorer(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({
            "error": {
                "kind": self.kind(),
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}
