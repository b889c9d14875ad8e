//! Handlers for the `/reports` resource.
//!
//! Each report is available as JSON and as a CSV download. The CSV form is
//! rendered in memory from the same records, one column per top-level field.

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use paintsite_core::csv::records_to_csv;
use paintsite_core::error::CoreError;
use paintsite_db::models::material::Material;
use paintsite_db::models::report::SiteReport;
use paintsite_db::repositories::ReportRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/reports/sites
pub async fn site_report(State(state): State<AppState>) -> AppResult<Json<Vec<SiteReport>>> {
    let report = ReportRepo::site_report(&state.pool).await?;
    Ok(Json(report))
}

/// GET /api/reports/sites/csv
pub async fn site_report_csv(State(state): State<AppState>) -> AppResult<Response> {
    let report = ReportRepo::site_report(&state.pool).await?;
    csv_download("site_report.csv", SiteReport::CSV_COLUMNS, &report)
}

/// GET /api/reports/inventory
pub async fn inventory_report(State(state): State<AppState>) -> AppResult<Json<Vec<Material>>> {
    let inventory = ReportRepo::inventory_report(&state.pool).await?;
    Ok(Json(inventory))
}

/// GET /api/reports/inventory/csv
pub async fn inventory_report_csv(State(state): State<AppState>) -> AppResult<Response> {
    let inventory = ReportRepo::inventory_report(&state.pool).await?;
    csv_download("inventory_report.csv", Material::CSV_COLUMNS, &inventory)
}

/// Render `records` as a `text/csv` attachment named `filename`.
fn csv_download<T: Serialize>(
    filename: &str,
    columns: &[&str],
    records: &[T],
) -> AppResult<Response> {
    let csv = records_to_csv(columns, records)
        .map_err(|e| CoreError::Internal(format!("Failed to render {filename}: {e}")))?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        csv,
    )
        .into_response())
}
