//! Unified error handling for edgeblocks core.
//!
//! Blocks never return these to the page: `decorate` collapses every error
//! into the block's empty state. They exist so the collapse point can log
//! what happened and so callers of the lower-level operations get types.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for edgeblocks core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EdgeError {
    /// Errors from the domain layer (block configuration, record mapping).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (fetching, decoding).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl EdgeError {
    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Shape => ErrorCategory::Shape,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories, matching the three ways a block degrades plus setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Block configuration is unusable (no or bad endpoint).
    Validation,
    /// Network failure or non-success status.
    Transport,
    /// Body is not the expected query shape.
    Shape,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type EdgeResult<T> = Result<T, EdgeError>;
