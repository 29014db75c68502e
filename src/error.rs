//! Crate-wide error type

use thiserror::Error;

/// Errors surfaced by the frontdesk workflow
#[derive(Debug, Error)]
pub enum FrontdeskError {
    /// No help request exists for the given identifier
    #[error("help request not found: {0}")]
    RequestNotFound(String),

    /// A help request with this identifier already exists
    #[error("help request already exists: {0}")]
    DuplicateRequest(String),

    /// The help request was already resolved by another writer
    #[error("help request already resolved: {0}")]
    AlreadyResolved(String),

    /// Rejected input (empty question, blank answer)
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration loading failed
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Unexpected internal failure
    #[error("internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, FrontdeskError>;

impl FrontdeskError {
    /// Stable machine-readable code for API payloads
    pub fn code(&self) -> &'static str {
        match self {
            Self::RequestNotFound(_) => "REQUEST_NOT_FOUND",
            Self::DuplicateRequest(_) => "DUPLICATE_REQUEST",
            Self::AlreadyResolved(_) => "ALREADY_RESOLVED",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}
