//! Route definitions for the `/logs` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::daily_log;
use crate::state::AppState;

/// Routes mounted at `/logs`.
///
/// ```text
/// POST   /                  -> create
/// GET    /site/{site_id}    -> list_by_site
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(daily_log::create))
        .route("/site/{site_id}", get(daily_log::list_by_site))
}
