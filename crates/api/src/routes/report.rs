//! Route definitions for the `/reports` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::report;
use crate::state::AppState;

/// Routes mounted at `/reports`.
///
/// ```text
/// GET /sites              -> site_report
/// GET /sites/csv          -> site_report_csv
/// GET /inventory          -> inventory_report
/// GET /inventory/csv      -> inventory_report_csv
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sites", get(report::site_report))
        .route("/sites/csv", get(report::site_report_csv))
        .route("/inventory", get(report::inventory_report))
        .route("/inventory/csv", get(report::inventory_report_csv))
}
