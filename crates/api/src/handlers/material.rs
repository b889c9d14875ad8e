//! Handlers for the `/materials` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use paintsite_core::error::CoreError;
use paintsite_core::types::DbId;
use paintsite_db::models::material::{CreateMaterial, Material};
use paintsite_db::repositories::MaterialRepo;

use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/materials
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Material>>> {
    let materials = MaterialRepo::list(&state.pool).await?;
    Ok(Json(materials))
}

/// POST /api/materials
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMaterial>,
) -> AppResult<(StatusCode, Json<Material>)> {
    let material = MaterialRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(material)))
}

/// DELETE /api/materials/{id}
///
/// Logs that already reference the material keep their stored cost.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if MaterialRepo::delete(&state.pool, &id).await? {
        Ok(Json(MessageResponse::deleted("Material")))
    } else {
        Err(CoreError::not_found("Material", id).into())
    }
}
