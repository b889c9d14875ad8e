pub mod daily_log;
pub mod labour;
pub mod material;
pub mod report;
pub mod site;
