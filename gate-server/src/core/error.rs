use thiserror::Error;

use crate::utils::AppError;

/// Top-level server error
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to bind server socket: {0}")]
    Bind(#[source] std::io::Error),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<AppError> for ServerError {
    fn from(err: AppError) -> Self {
        ServerError::Internal(anyhow::Error::new(err))
    }
}

/// Result type for server lifecycle operations
pub type Result<T> = std::result::Result<T, ServerError>;
