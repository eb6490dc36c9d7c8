//! Repository Module
//!
//! Plain async functions over the SQLite pool, one module per table group.
//! Callers pass validated, normalized input; repositories enforce the
//! cross-table invariants (badge uniqueness, grant revocation).

pub mod access;
pub mod employee;
pub mod event;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
