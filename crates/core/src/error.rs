use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// The request referenced data that exists but is not in a usable state,
    /// e.g. a model that was never attached to a snapshot.
    #[error("Precondition failed: {0}")]
    PreconditionFailed(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
