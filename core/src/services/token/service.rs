//! Main token service implementation

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use sr_shared::{ConfigurationError, JwtSettings};

use crate::domain::entities::{Claims, Principal};
use crate::errors::TokenError;

use super::config::TokenServiceConfig;

/// Issues and validates application-identity tokens.
///
/// Holds only immutable key material, so a single instance is shared by all
/// request workers without locking.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(&config.signing_key);
        let decoding_key = DecodingKey::from_secret(&config.signing_key);

        // jsonwebtoken only verifies the signature; expiry, issuer and
        // audience are checked by `validate_at` in a fixed order.
        let mut validation = Validation::new(config.algorithm);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.required_spec_claims = HashSet::new();

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Creates a token service from loaded settings.
    ///
    /// Missing key material is a [`ConfigurationError`] and must stop startup.
    pub fn from_settings(settings: &JwtSettings) -> Result<Self, ConfigurationError> {
        Ok(Self::new(TokenServiceConfig::from_settings(settings)?))
    }

    pub fn config(&self) -> &TokenServiceConfig {
        &self.config
    }

    /// Issues a token for the front-end application, valid from now
    pub fn issue(&self) -> Result<String, TokenError> {
        self.issue_at(Utc::now())
    }

    /// Issues a token whose issued-at is `now`
    pub fn issue_at(&self, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = Claims::for_application(
            &self.config.issuer,
            &self.config.audience,
            now,
            self.config.lifetime,
        );
        self.encode(&claims)
    }

    /// Validates a token against the current time
    pub fn validate(&self, token: &str) -> Result<Principal, TokenError> {
        self.validate_at(token, Utc::now())
    }

    /// Validates a token as of `now`.
    ///
    /// Checks, in order: signature, expiry (zero skew), issuer, audience.
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Result<Principal, TokenError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature
                | ErrorKind::InvalidAlgorithm
                | ErrorKind::InvalidAlgorithmName
                | ErrorKind::InvalidKeyFormat => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            })?;
        let claims = token_data.claims;

        if claims.is_expired_at(now) {
            return Err(TokenError::Expired);
        }
        if claims.iss != self.config.issuer {
            return Err(TokenError::InvalidIssuer);
        }
        if claims.aud != self.config.audience {
            return Err(TokenError::InvalidAudience);
        }

        let expires_at = claims.expires_at().ok_or(TokenError::Malformed)?;
        Ok(Principal::from_validated(claims, expires_at))
    }

    pub(crate) fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "Failed to sign token");
            TokenError::TokenGenerationFailed
        })
    }
}
