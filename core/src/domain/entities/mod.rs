//! Domain entities representing core business objects.

pub mod claims;
pub mod principal;
pub mod student;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use claims::{Claims, TOKEN_LIFETIME_DAYS};
pub use principal::{IdentityClaim, Principal};
pub use student::Student;
