//! Deployment environment selecting the `config/{environment}.toml` layer

use serde::{Deserialize, Serialize};
use std::{env, fmt, str::FromStr};

/// Variables consulted for the environment name, first match wins
const ENVIRONMENT_VARIABLES: [&str; 2] = ["ENVIRONMENT", "APP_ENVIRONMENT"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Reads the environment name from the process environment.
    ///
    /// Unset or unrecognised names fall back to [`Environment::Development`].
    pub fn from_env() -> Self {
        ENVIRONMENT_VARIABLES
            .iter()
            .find_map(|name| env::var(name).ok())
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    fn as_str(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Environment::Development, Environment::Staging, Environment::Production]
            .into_iter()
            .find(|env| env.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown environment: {}", s))
    }
}
