//! Daily log entity model and DTOs.

use paintsite_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Material consumed on a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialLine {
    pub material_id: DbId,
    pub quantity: i64,
}

/// Number of workers of one labour category on a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabourLine {
    pub labour_id: DbId,
    pub count: i64,
}

/// A row from the `daily_logs` table.
///
/// `total_cost` is computed once at submission and never recomputed, even if
/// the referenced materials or labour rates change later.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLog {
    #[serde(rename = "_id")]
    pub id: DbId,
    pub site_id: DbId,
    pub date: String,
    #[sqlx(json)]
    pub materials: Vec<MaterialLine>,
    #[sqlx(json)]
    pub labour: Vec<LabourLine>,
    pub notes: String,
    pub total_cost: f64,
}

/// DTO for submitting a daily log. The total cost is always derived.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDailyLog {
    pub site_id: DbId,
    pub date: String,
    #[serde(default)]
    pub materials: Vec<MaterialLine>,
    #[serde(default)]
    pub labour: Vec<LabourLine>,
    #[serde(default)]
    pub notes: String,
}
