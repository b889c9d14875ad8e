//! Labour entity model and DTOs.

use paintsite_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `labour` table: a worker category and its daily rate.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Labour {
    #[serde(rename = "_id")]
    pub id: DbId,
    pub name: String,
    pub rate_per_day: f64,
}

/// DTO for creating a labour entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLabour {
    pub name: String,
    pub rate_per_day: f64,
}
