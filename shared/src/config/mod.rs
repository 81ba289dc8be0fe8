//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Token signing material (issuer, audience, signing key)
//! - `database` - Optional relational store connection
//! - `environment` - Environment detection
//! - `secrets` - Secret identifiers fetched from the external secret store
//! - `server` - HTTP server and CORS configuration
//!
//! Configuration is assembled once at startup from layered sources and then
//! injected, immutable, into the services that need it.

pub mod auth;
pub mod database;
pub mod environment;
pub mod error;
pub mod secrets;
pub mod server;

use std::collections::HashMap;

use config::{Config, Environment as EnvironmentSource, File};
use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::JwtSettings;
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use error::ConfigurationError;
pub use secrets::SecretsConfig;
pub use server::{CorsConfig, ServerConfig};

/// Prefix for environment variable overrides (`APP__JWT__ISSUER`, ...)
pub const ENV_PREFIX: &str = "APP";

/// Separator between nesting levels in environment variable names
pub const ENV_SEPARATOR: &str = "__";

/// Directory holding the optional TOML configuration files
pub const CONFIG_DIR: &str = "config";

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment the process runs in
    #[serde(default)]
    pub environment: Environment,

    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Token signing configuration
    #[serde(default)]
    pub jwt: JwtSettings,

    /// Relational store configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Secrets to pull from the external secret store at startup
    #[serde(default)]
    pub secrets: SecretsConfig,
}

impl AppConfig {
    /// Load configuration for the environment named by `ENVIRONMENT`.
    ///
    /// Sources, lowest priority first:
    /// 1. built-in defaults
    /// 2. `config/default.toml` (optional)
    /// 3. `config/{environment}.toml` (optional)
    /// 4. `APP__*` environment variables
    /// 5. `overrides`, keyed by hierarchical configuration keys such as
    ///    `Jwt:SigningKey` (see [`crate::utils::secret_names`])
    pub fn load(overrides: &HashMap<String, String>) -> Result<Self, ConfigurationError> {
        Self::load_for(Environment::from_env(), overrides)
    }

    /// Load configuration for an explicit environment.
    pub fn load_for(
        environment: Environment,
        overrides: &HashMap<String, String>,
    ) -> Result<Self, ConfigurationError> {
        let mut builder = Config::builder()
            .add_source(File::with_name(&format!("{CONFIG_DIR}/default")).required(false))
            .add_source(File::with_name(&format!("{CONFIG_DIR}/{environment}")).required(false))
            .add_source(
                EnvironmentSource::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .list_separator(",")
                    .with_list_parse_key("secrets.names")
                    .with_list_parse_key("cors.allowed_origins")
                    .try_parsing(true),
            )
            .set_override("environment", environment.to_string())?;

        for (key, value) in overrides {
            builder = builder.set_override(config_key_to_path(key), value.as_str())?;
        }

        let config: AppConfig = builder.build()?.try_deserialize()?;
        Ok(config)
    }
}

/// Convert a hierarchical configuration key (`Jwt:SigningKey`) into the
/// dotted, snake-cased path used by the loaded configuration
/// (`jwt.signing_key`).
pub fn config_key_to_path(key: &str) -> String {
    key.split(':')
        .map(to_snake_case)
        .collect::<Vec<_>>()
        .join(".")
}

fn to_snake_case(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len() + 4);
    let mut previous_lower = false;
    for ch in segment.chars() {
        if ch.is_uppercase() {
            if previous_lower {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
            previous_lower = false;
        } else {
            previous_lower = ch.is_lowercase() || ch.is_ascii_digit();
            out.push(ch);
        }
    }
    out
}
