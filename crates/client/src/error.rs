//! Error types for the Fake Store client

use thiserror::Error;

/// Result type alias using the client error
pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Client error types
///
/// Non-2xx statuses are not errors: they come back as an
/// [`ApiResponse`](crate::ApiResponse) for the caller to inspect.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
