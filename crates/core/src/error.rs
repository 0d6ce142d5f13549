use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Raised by the stores when no entity carries the requested id.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Raised by caller-side validation, never by a store.
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl CoreError {
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
