//! Secret store consumers
//!
//! Secrets are fetched once at startup, before the server binds. Their
//! identifiers use the store's `--` delimiter and are returned keyed by the
//! hierarchical configuration key (`Jwt--SigningKey` -> `Jwt:SigningKey`).

mod env;
mod static_provider;

use std::collections::HashMap;

use async_trait::async_trait;
use sr_shared::secret_name_to_config_key;

use crate::InfrastructureError;

pub use env::EnvSecretsProvider;
pub use static_provider::StaticSecretsProvider;

#[async_trait]
pub trait SecretsProvider: Send + Sync {
    /// Reads one secret by its store identifier
    async fn get_secret(&self, name: &str) -> Result<Option<String>, InfrastructureError>;

    /// Fetches every named secret, keyed by translated configuration key.
    ///
    /// Fails on the first missing secret.
    async fn fetch(&self, names: &[String]) -> Result<HashMap<String, String>, InfrastructureError> {
        let mut secrets = HashMap::with_capacity(names.len());

        for name in names {
            let value = self
                .get_secret(name)
                .await?
                .ok_or_else(|| InfrastructureError::SecretNotFound { name: name.clone() })?;
            secrets.insert(secret_name_to_config_key(name), value);
        }

        tracing::info!(count = secrets.len(), "Loaded secrets");
        Ok(secrets)
    }
}
