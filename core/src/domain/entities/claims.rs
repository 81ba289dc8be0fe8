//! Token payload for the application-identity tokens.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sr_shared::constants::{APPLICATION_ID_CLAIM, FRONT_END_APPLICATION_ID};

use crate::errors::TokenError;

/// Token lifetime (3 days)
pub const TOKEN_LIFETIME_DAYS: i64 = 3;

/// Claims structure for JWT payload.
///
/// Registered claims are explicit fields. Identity claims (such as
/// `ApplicationId`) are flattened into the payload next to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Identity claims, keyed by claim name
    #[serde(flatten)]
    pub identity: BTreeMap<String, Value>,
}

impl Claims {
    /// Creates the claims for the front-end application token
    pub fn for_application(
        issuer: &str,
        audience: &str,
        issued_at: DateTime<Utc>,
        lifetime: Duration,
    ) -> Self {
        let mut identity = BTreeMap::new();
        identity.insert(
            APPLICATION_ID_CLAIM.to_string(),
            Value::String(FRONT_END_APPLICATION_ID.to_string()),
        );

        Self {
            iss: issuer.to_string(),
            aud: audience.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + lifetime).timestamp(),
            identity,
        }
    }

    /// Reads a string-valued identity claim
    pub fn claim(&self, name: &str) -> Option<&str> {
        self.identity.get(name).and_then(Value::as_str)
    }

    /// The `ApplicationId` claim, if present
    pub fn application_id(&self) -> Option<&str> {
        self.claim(APPLICATION_ID_CLAIM)
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }

    /// Expired once `exp` is at or before `now`; no clock skew is tolerated
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.exp <= now.timestamp()
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Decodes a token's payload without verifying its signature or any of
    /// its claims.
    ///
    /// Only for holders of a token who need to inspect it locally (expiry,
    /// claims). Never use the result for an authorization decision.
    pub fn decode_unverified(token: &str) -> Result<Self, TokenError> {
        let mut validation = Validation::new(Algorithm::HS512);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)
            .map(|data| data.claims)
            .map_err(|_| TokenError::Malformed)
    }
}
