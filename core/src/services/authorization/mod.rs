//! Named-policy authorization engine
//!
//! Policies are predicates over a principal's claims. They are registered once
//! at startup in a [`PolicyRegistry`] and looked up by name per request.

mod policy;
mod registry;
mod service;


pub use policy::{ClaimValueRequirement, Policy, PolicyRequirement};
pub use registry::{default_policies, PolicyRegistry, PolicyRegistryBuilder};
pub use service::AuthorizationService;
