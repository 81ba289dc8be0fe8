//! # Student Records Core
//!
//! Domain layer for the student records API: claims and principals, the
//! token issuer and validator, the named-policy authorization engine, and the
//! student service that runs behind the authorization gate.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
