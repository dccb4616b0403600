// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    /// Another article of the same author already holds the slug. Raised by
    /// the storage layer when a concurrent write wins the race; callers may
    /// regenerate the slug and retry.
    #[error("slug conflict: {0}")]
    SlugConflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    pub fn is_slug_conflict(&self) -> bool {
        matches!(self, DomainError::SlugConflict(_))
    }
}
