//! Repository for the `materials` table.

use paintsite_core::types::new_document_id;
use sqlx::{SqliteConnection, SqlitePool};

use crate::models::material::{CreateMaterial, Material};

const COLUMNS: &str = "id, name, quantity, cost_per_unit";

/// Provides CRUD and inventory operations for materials.
pub struct MaterialRepo;

impl MaterialRepo {
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateMaterial,
    ) -> Result<Material, sqlx::Error> {
        let query = format!(
            "INSERT INTO materials (id, name, quantity, cost_per_unit)
             VALUES (?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Material>(&query)
            .bind(new_document_id())
            .bind(&input.name)
            .bind(input.quantity)
            .bind(input.cost_per_unit)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Material>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM materials WHERE id = ?");
        sqlx::query_as::<_, Material>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &SqlitePool) -> Result<Vec<Material>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM materials ORDER BY rowid");
        sqlx::query_as::<_, Material>(&query).fetch_all(pool).await
    }

    /// Delete a material by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM materials WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Take `quantity` units out of stock and return the material's unit cost.
    ///
    /// Lookup and decrement are one statement, so concurrent callers never
    /// lose each other's decrements. There is no floor: stock may go
    /// negative. Returns `None` (and changes nothing) if the id is unknown.
    ///
    /// A draw-down whose result does not fit in an `i64` fails with a CHECK
    /// constraint violation and leaves the stock untouched.
    pub async fn draw_down(
        conn: &mut SqliteConnection,
        id: &str,
        quantity: i64,
    ) -> Result<Option<f64>, sqlx::Error> {
        sqlx::query_scalar(
            "UPDATE materials SET quantity = quantity - ? WHERE id = ? RETURNING cost_per_unit",
        )
        .bind(quantity)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
    }
}
