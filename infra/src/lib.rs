//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborators the core depends on:
//! - **Secrets**: providers that deliver signing-key material at startup
//! - **Database**: MySQL connection pool and student repository using SQLx
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Secret store consumers
pub mod secrets;

pub use secrets::{EnvSecretsProvider, SecretsProvider, StaticSecretsProvider};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A requested secret does not exist in the store
    #[error("Secret not found: {name}")]
    SecretNotFound { name: String },

    /// The secret store could not be read
    #[error("Secret store error: {0}")]
    SecretStore(String),
}
