use std::time::Duration;

use thiserror::Error;

/// Client-side failures. Authorization denials are not errors; they come
/// back as an `AuthorizationError` envelope.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response: {0}")]
    InvalidResponse(String),

    #[error("Login did not complete within {0:?}")]
    LoginTimeout(Duration),

    #[error("Credential storage error: {0}")]
    Storage(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
