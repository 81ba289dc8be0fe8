//! Business services containing domain logic and use cases.

pub mod authentication;
pub mod authorization;
pub mod student;
pub mod token;

// Re-export commonly used types
pub use authentication::AuthenticationService;
pub use authorization::{
    default_policies, AuthorizationService, ClaimValueRequirement, Policy, PolicyRegistry,
    PolicyRequirement,
};
pub use student::StudentService;
pub use token::{TokenService, TokenServiceConfig};
