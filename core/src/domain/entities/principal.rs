//! Validated identity derived from a token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::claims::Claims;

/// A named attribute asserted inside a token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityClaim {
    pub name: String,
    pub value: String,
}

impl IdentityClaim {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// The authenticated caller of a request.
///
/// Only the token validator creates principals from tokens; a principal is
/// therefore proof that signature, expiry, issuer and audience were checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    claims: Vec<IdentityClaim>,
    issuer: String,
    audience: String,
    expires_at: DateTime<Utc>,
}

impl Principal {
    pub fn new(
        claims: Vec<IdentityClaim>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            claims,
            issuer: issuer.into(),
            audience: audience.into(),
            expires_at,
        }
    }

    /// Builds a principal from already-validated claims
    pub(crate) fn from_validated(claims: Claims, expires_at: DateTime<Utc>) -> Self {
        let identity = claims
            .identity
            .into_iter()
            .map(|(name, value)| {
                let value = match value {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                IdentityClaim { name, value }
            })
            .collect();

        Self::new(identity, claims.iss, claims.aud, expires_at)
    }

    pub fn claims(&self) -> &[IdentityClaim] {
        &self.claims
    }

    /// First value of the named claim
    pub fn claim(&self, name: &str) -> Option<&str> {
        self.claims
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.value.as_str())
    }

    /// Whether the principal carries the exact claim/value pair
    pub fn has_claim(&self, name: &str, value: &str) -> bool {
        self.claims.iter().any(|c| c.name == name && c.value == value)
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }
}
