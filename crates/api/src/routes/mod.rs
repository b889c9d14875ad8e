pub mod daily_log;
pub mod health;
pub mod labour;
pub mod material;
pub mod report;
pub mod site;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /sites                        list, create
/// /sites/{id}                   update, delete
///
/// /materials                    list, create
/// /materials/{id}               delete
///
/// /labour                       list, create
/// /labour/{id}                  delete
///
/// /logs                         submit (POST)
/// /logs/site/{site_id}          list logs for a site
///
/// /reports/sites                site report (JSON)
/// /reports/sites/csv            site report (CSV download)
/// /reports/inventory            inventory report (JSON)
/// /reports/inventory/csv        inventory report (CSV download)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/sites", site::router())
        .nest("/materials", material::router())
        .nest("/labour", labour::router())
        .nest("/logs", daily_log::router())
        .nest("/reports", report::router())
}
