//! Handlers for the `/labour` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use paintsite_core::error::CoreError;
use paintsite_core::types::DbId;
use paintsite_db::models::labour::{CreateLabour, Labour};
use paintsite_db::repositories::LabourRepo;

use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/labour
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Labour>>> {
    let labour = LabourRepo::list(&state.pool).await?;
    Ok(Json(labour))
}

/// POST /api/labour
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateLabour>,
) -> AppResult<(StatusCode, Json<Labour>)> {
    let labour = LabourRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(labour)))
}

/// DELETE /api/labour/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if LabourRepo::delete(&state.pool, &id).await? {
        Ok(Json(MessageResponse::deleted("Labour")))
    } else {
        Err(CoreError::not_found("Labour", id).into())
    }
}
