// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (collapsed into the empty block state, then logged)
/// - Categorizable (for CLI display)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Block configuration
    // ========================================================================
    #[error("Block has no query endpoint configured")]
    MissingEndpoint,

    #[error("Invalid query endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("Endpoint '{url}' has no hostname")]
    MissingHost { url: String },

    // ========================================================================
    // Record mapping
    // ========================================================================
    #[error("Image reference has no publish URL")]
    MissingPublishUrl,
}

impl DomainError {
    pub fn invalid_endpoint(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidEndpoint {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingEndpoint | Self::InvalidEndpoint { .. } | Self::MissingHost { .. } => {
                ErrorCategory::Validation
            }
            Self::MissingPublishUrl => ErrorCategory::Shape,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Shape,
}
