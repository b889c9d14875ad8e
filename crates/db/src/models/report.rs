//! Report rows joining sites with their daily logs.

use serde::Serialize;

use crate::models::daily_log::DailyLog;
use crate::models::site::Site;

/// One site with all of its logs and their summed cost.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteReport {
    #[serde(flatten)]
    pub site: Site,
    pub logs: Vec<DailyLog>,
    pub total_cost: f64,
}

impl SiteReport {
    /// Column order of the site CSV export.
    pub const CSV_COLUMNS: &'static [&'static str] = &[
        "_id",
        "name",
        "client",
        "address",
        "startDate",
        "status",
        "logs",
        "totalCost",
    ];

    /// Attach `logs` to `site`, summing their stored totals.
    pub fn new(site: Site, logs: Vec<DailyLog>) -> Self {
        let total_cost = logs.iter().map(|log| log.total_cost).sum();
        Self {
            site,
            logs,
            total_cost,
        }
    }
}
