//! Per-request authentication outcome and authorization decision.

use std::fmt;

use crate::domain::entities::Principal;
use crate::errors::TokenError;

/// Outcome of validating the credential attached to a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Authentication {
    /// No credential was presented
    Anonymous,
    /// The credential validated into a principal
    Authenticated(Principal),
    /// A credential was presented but failed validation
    Rejected(TokenError),
}

impl Authentication {
    pub fn principal(&self) -> Option<&Principal> {
        match self {
            Authentication::Authenticated(principal) => Some(principal),
            _ => None,
        }
    }
}

/// Why a request was denied. Diagnostic only; never sent to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DenialReason {
    MissingCredential,
    InvalidCredential(TokenError),
    PolicyNotSatisfied { policy: String },
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenialReason::MissingCredential => write!(f, "no credential presented"),
            DenialReason::InvalidCredential(err) => write!(f, "credential rejected: {}", err),
            DenialReason::PolicyNotSatisfied { policy } => {
                write!(f, "policy '{}' not satisfied", policy)
            }
        }
    }
}

/// Result of a single authorization check. Produced per call, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationDecision {
    pub authorized: bool,
    pub denied_reason: Option<DenialReason>,
}

impl AuthorizationDecision {
    pub fn allow() -> Self {
        Self {
            authorized: true,
            denied_reason: None,
        }
    }

    pub fn deny(reason: DenialReason) -> Self {
        Self {
            authorized: false,
            denied_reason: Some(reason),
        }
    }
}
