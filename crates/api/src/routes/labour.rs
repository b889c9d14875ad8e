//! Route definitions for the `/labour` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::labour;
use crate::state::AppState;

/// Routes mounted at `/labour`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(labour::list).post(labour::create))
        .route("/{id}", delete(labour::delete))
}
