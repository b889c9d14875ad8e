//! Handlers for the `/sites` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use paintsite_core::error::CoreError;
use paintsite_core::types::DbId;
use paintsite_db::models::site::{CreateSite, Site, UpdateSite};
use paintsite_db::repositories::SiteRepo;

use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/sites
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Site>>> {
    let sites = SiteRepo::list(&state.pool).await?;
    Ok(Json(sites))
}

/// POST /api/sites
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSite>,
) -> AppResult<(StatusCode, Json<Site>)> {
    let site = SiteRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(site)))
}

/// PUT /api/sites/{id}
///
/// Replaces every field except the id.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSite>,
) -> AppResult<Json<Site>> {
    let site = SiteRepo::update(&state.pool, &id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found("Site", id))?;
    Ok(Json(site))
}

/// DELETE /api/sites/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if SiteRepo::delete(&state.pool, &id).await? {
        Ok(Json(MessageResponse::deleted("Site")))
    } else {
        Err(CoreError::not_found("Site", id).into())
    }
}
