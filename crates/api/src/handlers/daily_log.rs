//! Handlers for the `/logs` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use paintsite_core::types::DbId;
use paintsite_db::models::daily_log::{CreateDailyLog, DailyLog};
use paintsite_db::repositories::DailyLogRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/logs
///
/// Any `totalCost` in the body is ignored; the stored value is derived from
/// the line items and current material and labour prices.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateDailyLog>,
) -> AppResult<(StatusCode, Json<DailyLog>)> {
    let log = DailyLogRepo::submit(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(log)))
}

/// GET /api/logs/site/{site_id}
pub async fn list_by_site(
    State(state): State<AppState>,
    Path(site_id): Path<DbId>,
) -> AppResult<Json<Vec<DailyLog>>> {
    let logs = DailyLogRepo::list_by_site(&state.pool, &site_id).await?;
    Ok(Json(logs))
}
