//! Configuration errors

use thiserror::Error;

/// Errors raised while assembling or validating configuration.
///
/// Every variant is fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Missing required configuration setting: {0}")]
    MissingSetting(String),

    #[error("Invalid configuration value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}
