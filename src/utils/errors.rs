use thiserror::Error;

use crate::api::remit::ApiError;

/// Crate-wide error taxonomy
///
/// Fetch and Storage errors on read paths are converted to an Error process
/// state at the coordinator boundary; Validation errors are raised before any
/// storage or network call is made.
#[derive(Debug, Error)]
pub enum RemitError {
    #[error("Fetch failed: {0}")]
    Fetch(#[from] ApiError),
    #[error("Storage failure: {0}")]
    Storage(#[from] sqlx::Error),
    #[error("Corrupt transaction record: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("{0}")]
    Validation(String),
}

impl RemitError {
    /// Shorthand for a validation failure with a user-facing message
    pub fn validation(message: impl Into<String>) -> Self {
        RemitError::Validation(message.into())
    }
}
