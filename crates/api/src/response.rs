//! Shared response body types for API handlers.

use serde::Serialize;

/// `{ "message": "..." }` confirmation body returned by delete endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    /// Confirmation that an entity was deleted, e.g. `"Site deleted"`.
    pub fn deleted(entity: &str) -> Self {
        Self {
            message: format!("{entity} deleted"),
        }
    }
}
