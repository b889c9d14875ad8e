//! Repository for the `daily_logs` table.
//!
//! Submitting a log is the one multi-step write in the system: every
//! material line draws down inventory, every line is priced, and the log is
//! stored with the frozen total. All of it runs in a single transaction that
//! takes the write lock up front, so overlapping submissions queue on the
//! lock instead of failing to upgrade from a read.

use paintsite_core::costing::CostTally;
use paintsite_core::types::new_document_id;
use sqlx::types::Json;
use sqlx::SqlitePool;

use crate::models::daily_log::{CreateDailyLog, DailyLog};
use crate::repositories::{LabourRepo, MaterialRepo};

const COLUMNS: &str = "id, site_id, date, materials, labour, notes, total_cost";

/// Provides submission and lookup of daily logs. Logs are never updated or
/// deleted once stored.
pub struct DailyLogRepo;

impl DailyLogRepo {
    /// Price a daily log, draw its materials out of inventory, and store it.
    ///
    /// Material and labour ids that do not resolve are skipped: they add
    /// nothing to the total and touch no inventory. The site id is not
    /// checked either.
    pub async fn submit(
        pool: &SqlitePool,
        input: &CreateDailyLog,
    ) -> Result<DailyLog, sqlx::Error> {
        let mut tx = pool.begin_with("BEGIN IMMEDIATE").await?;
        let mut tally = CostTally::new();

        for line in &input.materials {
            let cost_per_unit =
                MaterialRepo::draw_down(&mut *tx, &line.material_id, line.quantity).await?;
            if cost_per_unit.is_none() {
                tracing::warn!(
                    site_id = %input.site_id,
                    material_id = %line.material_id,
                    "Unknown material in daily log, line skipped"
                );
            }
            tally.add_material(cost_per_unit, line.quantity);
        }

        for line in &input.labour {
            let rate_per_day = LabourRepo::rate_per_day(&mut *tx, &line.labour_id).await?;
            if rate_per_day.is_none() {
                tracing::warn!(
                    site_id = %input.site_id,
                    labour_id = %line.labour_id,
                    "Unknown labour in daily log, line skipped"
                );
            }
            tally.add_labour(rate_per_day, line.count);
        }

        let query = format!(
            "INSERT INTO daily_logs (id, site_id, date, materials, labour, notes, total_cost)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        let log = sqlx::query_as::<_, DailyLog>(&query)
            .bind(new_document_id())
            .bind(&input.site_id)
            .bind(&input.date)
            .bind(Json(&input.materials))
            .bind(Json(&input.labour))
            .bind(&input.notes)
            .bind(tally.total())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            log_id = %log.id,
            site_id = %log.site_id,
            total_cost = log.total_cost,
            skipped_lines = tally.skipped(),
            "Daily log stored"
        );
        Ok(log)
    }

    pub async fn find_by_id(pool: &SqlitePool, id: &str) -> Result<Option<DailyLog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM daily_logs WHERE id = ?");
        sqlx::query_as::<_, DailyLog>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All logs whose `site_id` equals `site_id`, oldest first. The site
    /// itself need not exist.
    pub async fn list_by_site(
        pool: &SqlitePool,
        site_id: &str,
    ) -> Result<Vec<DailyLog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM daily_logs WHERE site_id = ? ORDER BY rowid");
        sqlx::query_as::<_, DailyLog>(&query)
            .bind(site_id)
            .fetch_all(pool)
            .await
    }
}
