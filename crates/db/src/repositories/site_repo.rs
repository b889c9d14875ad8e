//! Repository for the `sites` table.

use paintsite_core::types::new_document_id;
use sqlx::types::Json;
use sqlx::SqlitePool;

use crate::models::site::{CreateSite, Site, UpdateSite};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, client, address, start_date, status";

/// Provides CRUD operations for sites.
pub struct SiteRepo;

impl SiteRepo {
    /// Insert a new site under a freshly generated id, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateSite) -> Result<Site, sqlx::Error> {
        let query = format!(
            "INSERT INTO sites (id, name, client, address, start_date, status)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Site>(&query)
            .bind(new_document_id())
            .bind(&input.name)
            .bind(Json(&input.client))
            .bind(&input.address)
            .bind(&input.start_date)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Site>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sites WHERE id = ?");
        sqlx::query_as::<_, Site>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &SqlitePool) -> Result<Vec<Site>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sites ORDER BY rowid");
        sqlx::query_as::<_, Site>(&query).fetch_all(pool).await
    }

    /// Replace every mutable field of a site. The id never changes.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: &str,
        input: &UpdateSite,
    ) -> Result<Option<Site>, sqlx::Error> {
        let query = format!(
            "UPDATE sites SET
                name = ?,
                client = ?,
                address = ?,
                start_date = ?,
                status = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Site>(&query)
            .bind(&input.name)
            .bind(Json(&input.client))
            .bind(&input.address)
            .bind(&input.start_date)
            .bind(&input.status)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a site by ID. Returns `true` if a row was removed.
    ///
    /// Logs referencing the site are left in place.
    pub async fn delete(pool: &SqlitePool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sites WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
