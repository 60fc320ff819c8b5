use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error body occasionally returned by the catalog service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: Option<String>,
    pub message: Option<String>,
    pub status: Option<i32>,
}

/// Errors for catalog API operations
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// 400 Bad Request
    #[error("Bad Request: {0}")]
    BadRequest(String),
    /// 404 Not Found
    #[error("Not Found: {0}")]
    NotFound(String),
    /// 5xx Server Error
    #[error("Server Error ({0}): {1}")]
    ServerError(i32, String),
    /// Other HTTP errors
    #[error("HTTP Error ({0}): {1}")]
    HttpError(i32, String),
    /// Network/request error
    #[error("{0}")]
    RequestError(String),
    /// Deserialization error
    #[error("{0}")]
    DeserializationError(String),
}
