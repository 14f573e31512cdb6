//! Cross-cutting error types.
//!
//! Storage errors live in `rockets-store` and query errors in `rockets-mining`.
//! The binary converges them through `anyhow`.

use thiserror::Error;

/// Errors that can be raised while building or checking domain objects.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed a structural check (empty name, missing reference id).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    pub(crate) fn blank(entity: &str, field: &str) -> Self {
        Self::Validation(format!("{entity} {field} must not be blank"))
    }
}
