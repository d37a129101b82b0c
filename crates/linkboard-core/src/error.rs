//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// Domain errors - business rule failures visible to callers.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("post not found: {id}")]
    NotFound { id: Uuid },

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("url already submitted: {0}")]
    DuplicateUrl(String),

    #[error("authentication required")]
    Unauthenticated,

    #[error("post store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("store connection failed: {0}")]
    Connection(String),

    #[error("query execution failed: {0}")]
    Query(String),

    #[error("post not found")]
    NotFound,

    #[error("constraint violation: {0}")]
    Constraint(String),
}
