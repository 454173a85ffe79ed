// src/infrastructure/publishers/error.rs
use crate::application::ports::http::{HttpResponse, TransportError};
use crate::domain::errors::DomainError;
use thiserror::Error;

/// Failure inside one adapter. Never leaves the adapter: `publish` turns it
/// into a failed result carrying this message.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("{context}: {status} {reason} - {body}")]
    Remote {
        context: String,
        status: u16,
        reason: String,
        body: String,
    },

    #[error("{0}")]
    UnexpectedResponse(String),

    #[error("{0}")]
    Io(String),

    #[error(transparent)]
    Persistence(#[from] DomainError),
}

impl PublishError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::UnexpectedResponse(msg.into())
    }

    /// Remote answered with a non-2xx status; its body is kept verbatim.
    pub fn remote(context: impl Into<String>, response: &HttpResponse) -> Self {
        Self::Remote {
            context: context.into(),
            status: response.status,
            reason: response.reason.clone(),
            body: response.text(),
        }
    }
}

/// Returns the response when it is 2xx, a [`PublishError::Remote`] otherwise.
pub fn ensure_success(
    response: HttpResponse,
    context: impl FnOnce() -> String,
) -> Result<HttpResponse, PublishError> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(PublishError::remote(context(), &response))
    }
}
