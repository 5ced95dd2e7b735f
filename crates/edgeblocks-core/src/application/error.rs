//! Application layer errors.
//!
//! These errors represent failures in talking to the content API, not
//! mapping rules. Mapping errors are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while loading a block's content.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The request never produced a response (DNS, connect, TLS, reset).
    #[error("Request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    /// The server answered with a non-success status.
    #[error("Request to {url} returned status {status}")]
    UnexpectedStatus { url: String, status: u16 },

    /// The response body is not a decodable query envelope.
    #[error("Response from {url} could not be decoded: {reason}")]
    MalformedBody { url: String, reason: String },
}

impl ApplicationError {
    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Transport { .. } | Self::UnexpectedStatus { .. } => ErrorCategory::Transport,
            Self::MalformedBody { .. } => ErrorCategory::Shape,
        }
    }
}
