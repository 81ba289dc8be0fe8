//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

pub use types::{AuthError, TokenError};

use sr_shared::ConfigurationError;
use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {message}")]
    NotFound { message: String },

    #[error("Repository error: {message}")]
    Repository { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

impl DomainError {
    /// Not-found error shared by the student service and its repositories
    pub fn student_not_found(id: i64) -> Self {
        DomainError::NotFound {
            message: format!("Failed to find a student with ID: {}", id),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
