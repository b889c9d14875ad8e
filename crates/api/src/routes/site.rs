//! Route definitions for the `/sites` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::site;
use crate::state::AppState;

/// Routes mounted at `/sites`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(site::list).post(site::create))
        .route("/{id}", put(site::update).delete(site::delete))
}
