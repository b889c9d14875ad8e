//! Repository for the `labour` table.

use paintsite_core::types::new_document_id;
use sqlx::{SqliteConnection, SqlitePool};

use crate::models::labour::{CreateLabour, Labour};

const COLUMNS: &str = "id, name, rate_per_day";

/// Provides CRUD operations for labour categories.
pub struct LabourRepo;

impl LabourRepo {
    pub async fn create(pool: &SqlitePool, input: &CreateLabour) -> Result<Labour, sqlx::Error> {
        let query = format!(
            "INSERT INTO labour (id, name, rate_per_day)
             VALUES (?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Labour>(&query)
            .bind(new_document_id())
            .bind(&input.name)
            .bind(input.rate_per_day)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Labour>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM labour WHERE id = ?");
        sqlx::query_as::<_, Labour>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &SqlitePool) -> Result<Vec<Labour>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM labour ORDER BY rowid");
        sqlx::query_as::<_, Labour>(&query).fetch_all(pool).await
    }

    /// Delete a labour entry by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM labour WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Daily rate for a labour id, or `None` if it does not exist.
    pub async fn rate_per_day(
        conn: &mut SqliteConnection,
        id: &str,
    ) -> Result<Option<f64>, sqlx::Error> {
        sqlx::query_scalar("SELECT rate_per_day FROM labour WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }
}
