//! Site entity model and DTOs.

use paintsite_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Client contact details, embedded in a site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// A row from the `sites` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    #[serde(rename = "_id")]
    pub id: DbId,
    pub name: String,
    #[sqlx(json)]
    pub client: Client,
    pub address: String,
    pub start_date: String,
    pub status: String,
}

/// DTO for creating a site.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSite {
    pub name: String,
    pub client: Client,
    pub address: String,
    pub start_date: String,
    pub status: String,
}

/// Updates replace every mutable field, so they take the full create body.
pub type UpdateSite = CreateSite;
