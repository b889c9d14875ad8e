//! Material entity model and DTOs.

use paintsite_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `materials` table.
///
/// `quantity` is units on hand. It is decremented by daily logs without a
/// floor, so it can go negative.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    #[serde(rename = "_id")]
    pub id: DbId,
    pub name: String,
    pub quantity: i64,
    pub cost_per_unit: f64,
}

impl Material {
    /// Column order of the inventory CSV export.
    pub const CSV_COLUMNS: &'static [&'static str] = &["_id", "name", "quantity", "costPerUnit"];
}

/// DTO for creating a material.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMaterial {
    pub name: String,
    pub quantity: i64,
    pub cost_per_unit: f64,
}
