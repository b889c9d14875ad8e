//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&SqlitePool` (or a connection inside a transaction) as the first
//! argument. Lists are returned in insertion order.

pub mod daily_log_repo;
pub mod labour_repo;
pub mod material_repo;
pub mod report_repo;
pub mod site_repo;

pub use daily_log_repo::DailyLogRepo;
pub use labour_repo::LabourRepo;
pub use material_repo::MaterialRepo;
pub use report_repo::ReportRepo;
pub use site_repo::SiteRepo;
