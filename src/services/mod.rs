use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod customer;
pub mod image;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Not found")]
    NotFound,

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    QuotaExceeded(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::QuotaExceeded { .. } => ServiceError::QuotaExceeded(err.to_string()),
            RepositoryError::ValidationError(msg) | RepositoryError::ConstraintViolation(msg) => {
                ServiceError::Validation(msg)
            }
            other => ServiceError::Internal(other.to_string()),
        }
    }
}
