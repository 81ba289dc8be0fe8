//! Authentication and token error types
//!
//! Token failure kinds are kept distinct for diagnostics. The HTTP layer
//! collapses all of them into a single authorization error.

use thiserror::Error;

/// Token validation and issuance errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token expired")]
    Expired,

    #[error("Invalid issuer")]
    InvalidIssuer,

    #[error("Invalid audience")]
    InvalidAudience,

    #[error("Malformed token")]
    Malformed,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Authentication and authorization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Application ID is missing.")]
    ApplicationIdMissing,

    #[error("Application ID is invalid.")]
    ApplicationIdInvalid,

    #[error("No credential was presented")]
    MissingCredential,

    #[error("Credential rejected: {0}")]
    InvalidCredential(TokenError),

    #[error("Policy '{policy}' is not satisfied")]
    PolicyNotSatisfied { policy: String },

    /// Programming error: a handler referenced a policy nobody registered
    #[error("Unknown authorization policy: {policy}")]
    UnknownPolicy { policy: String },
}

impl AuthError {
    /// Errors caused by the shape of a login request
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, AuthError::ApplicationIdMissing | AuthError::ApplicationIdInvalid)
    }
}
