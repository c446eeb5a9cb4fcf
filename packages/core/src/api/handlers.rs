use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::AppState;
use crate::error::AppError;
use crate::report::{build_block_reports, GlobalFeeSummary, PerBlockFeeReport};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockDataQuery {
    /// Report on the batch of blocks below this height instead of the tip.
    pub before_height: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct BlockDataResponse {
    pub payload: Vec<PerBlockFeeReport>,
}

/// `GET /api/fetchBlockData`
///
/// Runs the whole pipeline from scratch on every call.
pub async fn fetch_block_data(
    State(state): State<AppState>,
    Query(query): Query<BlockDataQuery>,
) -> Result<Json<BlockDataResponse>, AppError> {
    let payload = build_block_reports(
        state.explorer.as_ref(),
        &state.report_config,
        query.before_height,
    )
    .await?;

    Ok(Json(BlockDataResponse { payload }))
}

/// `GET /api/summary`
pub async fn fetch_summary(
    State(state): State<AppState>,
    Query(query): Query<BlockDataQuery>,
) -> Result<Json<GlobalFeeSummary>, AppError> {
    let reports = build_block_reports(
        state.explorer.as_ref(),
        &state.report_config,
        query.before_height,
    )
    .await?;

    Ok(Json(GlobalFeeSummary::from_reports(&reports)))
}

pub async fn api_not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": {
                "kind": "not_found",
                "message": format!("no route for {}", uri.path()),
            }
        })),
    )
}
