use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Invalid {entity} id: {raw}")]
    InvalidId { entity: &'static str, raw: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid action: {0}")]
    InvalidAction(String),

    #[error("Duplicate title: {0}")]
    DuplicateTitle(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Cooldown active, retry in {retry_after_secs}s")]
    CooldownActive { retry_after_secs: u64 },

    #[error("Internal error: {0}")]
    Internal(String),
}
