//! Secret store configuration

use serde::{Deserialize, Serialize};

/// Secret identifiers fetched once at startup.
///
/// Identifiers use the store's `--` delimiter, e.g. `Jwt--SigningKey`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SecretsConfig {
    #[serde(default)]
    pub names: Vec<String>,
}

impl SecretsConfig {
    pub fn is_enabled(&self) -> bool {
        !self.names.is_empty()
    }
}
