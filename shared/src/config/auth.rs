//! Token signing configuration

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::ConfigurationError;

/// Default token lifetime in days
pub const DEFAULT_TOKEN_LIFETIME_DAYS: i64 = 3;

/// Hierarchical configuration keys of the signing material
pub const ISSUER_KEY: &str = "Jwt:Issuer";
pub const AUDIENCE_KEY: &str = "Jwt:Audience";
pub const SIGNING_KEY_KEY: &str = "Jwt:SigningKey";

/// Signing key material plus issuer/audience strings.
///
/// All three strings must be non-empty before tokens can be issued or
/// validated; see [`JwtSettings::validate`].
#[derive(Clone, Deserialize, Serialize)]
pub struct JwtSettings {
    /// `iss` claim written into and required from every token
    #[serde(default)]
    pub issuer: String,

    /// `aud` claim written into and required from every token
    #[serde(default)]
    pub audience: String,

    /// Shared HMAC secret
    #[serde(default, skip_serializing)]
    pub signing_key: String,

    /// Lifetime of an issued token in days
    #[serde(default = "default_token_lifetime_days")]
    pub token_lifetime_days: i64,
}

impl Default for JwtSettings {
    fn default() -> Self {
        Self {
            issuer: String::new(),
            audience: String::new(),
            signing_key: String::new(),
            token_lifetime_days: default_token_lifetime_days(),
        }
    }
}

impl JwtSettings {
    /// Create settings with the default token lifetime
    pub fn new(
        issuer: impl Into<String>,
        audience: impl Into<String>,
        signing_key: impl Into<String>,
    ) -> Self {
        Self {
            issuer: issuer.into(),
            audience: audience.into(),
            signing_key: signing_key.into(),
            ..Default::default()
        }
    }

    /// Fail with the first missing key, in `Issuer`, `Audience`, `SigningKey` order.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let required = [
            (ISSUER_KEY, &self.issuer),
            (AUDIENCE_KEY, &self.audience),
            (SIGNING_KEY_KEY, &self.signing_key),
        ];

        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigurationError::MissingSetting(key.to_string()));
            }
        }

        if self.token_lifetime_days <= 0 {
            return Err(ConfigurationError::InvalidValue {
                key: "Jwt:TokenLifetimeDays".to_string(),
                reason: "must be a positive number of days".to_string(),
            });
        }

        Ok(())
    }
}

impl fmt::Debug for JwtSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtSettings")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("signing_key", &"<redacted>")
            .field("token_lifetime_days", &self.token_lifetime_days)
            .finish()
    }
}

fn default_token_lifetime_days() -> i64 {
    DEFAULT_TOKEN_LIFETIME_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_complete_settings() {
        let settings = JwtSettings::new("issuer", "audience", "secret");
        assert!(settings.validate().is_ok());
        assert_eq!(settings.token_lifetime_days, 3);
    }

    #[test]
    fn test_validate_reports_missing_key() {
        let missing_key = JwtSettings::new("issuer", "audience", "");
        match missing_key.validate() {
            Err(ConfigurationError::MissingSetting(key)) => assert_eq!(key, "Jwt:SigningKey"),
            other => panic!("unexpected result: {:?}", other),
        }

        let missing_issuer = JwtSettings::new("  ", "audience", "secret");
        match missing_issuer.validate() {
            Err(ConfigurationError::MissingSetting(key)) => assert_eq!(key, "Jwt:Issuer"),
            other => panic!("unexpected result: {:?}", other),
        }

        let missing_audience = JwtSettings::new("issuer", "", "secret");
        assert!(matches!(
            missing_audience.validate(),
            Err(ConfigurationError::MissingSetting(key)) if key == "Jwt:Audience"
        ));
    }

    #[test]
    fn test_debug_redacts_signing_key() {
        let settings = JwtSettings::new("issuer", "audience", "super-secret-value");
        let rendered = format!("{:?}", settings);
        assert!(!rendered.contains("super-secret-value"));
        assert!(rendered.contains("<redacted>"));
    }
}
