//! Configuration for the token service

use std::fmt;

use chrono::Duration;
use jsonwebtoken::Algorithm;
use sr_shared::config::auth::{AUDIENCE_KEY, ISSUER_KEY, SIGNING_KEY_KEY};
use sr_shared::{ConfigurationError, JwtSettings};

use crate::domain::entities::TOKEN_LIFETIME_DAYS;

/// Immutable signing material and token parameters
#[derive(Clone)]
pub struct TokenServiceConfig {
    pub(crate) issuer: String,
    pub(crate) audience: String,
    pub(crate) signing_key: Vec<u8>,
    pub(crate) lifetime: Duration,
    pub(crate) algorithm: Algorithm,
}

impl TokenServiceConfig {
    /// Builds a config with the default lifetime and HS512.
    ///
    /// Fails if any of the three values is empty.
    pub fn new(
        issuer: impl Into<String>,
        audience: impl Into<String>,
        signing_key: impl AsRef<[u8]>,
    ) -> Result<Self, ConfigurationError> {
        let issuer = issuer.into();
        let audience = audience.into();
        let signing_key = signing_key.as_ref().to_vec();

        if issuer.trim().is_empty() {
            return Err(ConfigurationError::MissingSetting(ISSUER_KEY.to_string()));
        }
        if audience.trim().is_empty() {
            return Err(ConfigurationError::MissingSetting(AUDIENCE_KEY.to_string()));
        }
        if signing_key.is_empty() {
            return Err(ConfigurationError::MissingSetting(SIGNING_KEY_KEY.to_string()));
        }

        Ok(Self {
            issuer,
            audience,
            signing_key,
            lifetime: Duration::days(TOKEN_LIFETIME_DAYS),
            algorithm: Algorithm::HS512,
        })
    }

    pub fn from_settings(settings: &JwtSettings) -> Result<Self, ConfigurationError> {
        settings.validate()?;
        Ok(Self::new(&settings.issuer, &settings.audience, settings.signing_key.as_bytes())?
            .with_lifetime(Duration::days(settings.token_lifetime_days)))
    }

    pub fn with_lifetime(mut self, lifetime: Duration) -> Self {
        self.lifetime = lifetime;
        self
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
}

impl fmt::Debug for TokenServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenServiceConfig")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("signing_key", &"<redacted>")
            .field("lifetime", &self.lifetime)
            .field("algorithm", &self.algorithm)
            .finish()
    }
}
