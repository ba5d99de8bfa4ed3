pub mod review;
pub mod vocabulary;

use crate::response::AppError;
use crate::store::ProfileStoreError;

/// Errors surfaced by the vocabulary and review services. All of them are
/// recoverable at the session level; none should take the host down.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("word not found: {0}")]
    NotFound(String),
    #[error("invalid state: {0}")]
    InvalidState(String),
    #[error("nothing to review")]
    EmptyPool,
    #[error("validation error: {0}")]
    Validation(String),
    #[error(transparent)]
    Store(#[from] ProfileStoreError),
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(message) => AppError::not_found(message),
            ServiceError::InvalidState(message) => AppError::invalid_state(message),
            ServiceError::EmptyPool => AppError::empty_pool("nothing to review"),
            ServiceError::Validation(message) => AppError::validation(message),
            ServiceError::Store(source) => AppError::persistence(source.to_string()),
        }
    }
}
