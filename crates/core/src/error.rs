use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub fn not_found(entity: &'static str, id: impl Into<DbId>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn not_found_keeps_entity_and_id() {
        let err = CoreError::not_found("Site", "abc");
        assert_matches!(err, CoreError::NotFound { entity: "Site", ref id } if id == "abc");
        assert_eq!(err.to_string(), "Entity not found: Site with id abc");
    }
}
