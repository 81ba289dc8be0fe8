//! Value objects representing immutable domain concepts.

pub mod authorization;

// Re-export commonly used types
pub use authorization::{Authentication, AuthorizationDecision, DenialReason};
