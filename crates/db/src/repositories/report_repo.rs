//! Read-only report queries spanning several tables.

use sqlx::SqlitePool;

use crate::models::material::Material;
use crate::models::report::SiteReport;
use crate::repositories::{DailyLogRepo, MaterialRepo, SiteRepo};

pub struct ReportRepo;

impl ReportRepo {
    /// Every site with its logs attached and their stored totals summed.
    ///
    /// Logs whose site no longer exists do not appear.
    pub async fn site_report(pool: &SqlitePool) -> Result<Vec<SiteReport>, sqlx::Error> {
        let sites = SiteRepo::list(pool).await?;
        let mut reports = Vec::with_capacity(sites.len());

        for site in sites {
            let logs = DailyLogRepo::list_by_site(pool, &site.id).await?;
            reports.push(SiteReport::new(site, logs));
        }

        Ok(reports)
    }

    /// Current stock of every material.
    pub async fn inventory_report(pool: &SqlitePool) -> Result<Vec<Material>, sqlx::Error> {
        MaterialRepo::list(pool).await
    }
}
