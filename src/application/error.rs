// src/application/error.rs
use crate::domain::{errors::DomainError, publishing::UnknownPlatform};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Failures of article commands and queries. Stale writes surface as
/// `Domain(DomainError::Conflict)` from the repositories.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

impl From<UnknownPlatform> for ApplicationError {
    fn from(err: UnknownPlatform) -> Self {
        Self::Validation(err.to_string())
    }
}
