//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` record struct matching
//! the stored row and a `Deserialize` create DTO. JSON field names follow the
//! frontend contract: `_id` for the identifier, camelCase for the rest.

pub mod daily_log;
pub mod labour;
pub mod material;
pub mod report;
pub mod site;
