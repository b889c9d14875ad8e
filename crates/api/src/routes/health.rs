//! Liveness endpoint, mounted beside `/api` rather than under it.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when the store answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

impl HealthResponse {
    fn from_store_probe(db_healthy: bool) -> Self {
        Self {
            status: if db_healthy { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }
    }
}

/// GET /health
///
/// Always answers 200 so load balancers can tell a running process from a
/// dead one; store trouble shows up in the body.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let probe = paintsite_db::health_check(&state.pool).await;
    if let Err(err) = &probe {
        tracing::warn!(error = %err, "Store unreachable from health check");
    }
    Json(HealthResponse::from_store_probe(probe.is_ok()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
