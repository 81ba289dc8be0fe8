//! Authorization checks against registered policies

use crate::domain::entities::Principal;
use crate::domain::value_objects::{Authentication, AuthorizationDecision, DenialReason};
use crate::errors::AuthError;

use super::registry::PolicyRegistry;

/// Evaluates named policies. Stateless apart from the fixed registry.
#[derive(Debug, Clone)]
pub struct AuthorizationService {
    registry: PolicyRegistry,
}

impl AuthorizationService {
    pub fn new(registry: PolicyRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &PolicyRegistry {
        &self.registry
    }

    /// Whether `principal` satisfies the named policy.
    ///
    /// An unknown policy name is a programming error, not a denial.
    pub fn authorize(&self, principal: &Principal, policy_name: &str) -> Result<bool, AuthError> {
        let policy = self
            .registry
            .get(policy_name)
            .ok_or_else(|| AuthError::UnknownPolicy {
                policy: policy_name.to_string(),
            })?;

        Ok(policy.evaluate(principal))
    }

    /// Full decision for a request's authentication outcome
    pub fn decide(
        &self,
        authentication: &Authentication,
        policy_name: &str,
    ) -> Result<AuthorizationDecision, AuthError> {
        if !self.registry.contains(policy_name) {
            return Err(AuthError::UnknownPolicy {
                policy: policy_name.to_string(),
            });
        }

        let decision = match authentication {
            Authentication::Anonymous => {
                AuthorizationDecision::deny(DenialReason::MissingCredential)
            }
            Authentication::Rejected(err) => {
                AuthorizationDecision::deny(DenialReason::InvalidCredential(err.clone()))
            }
            Authentication::Authenticated(principal) => {
                if self.authorize(principal, policy_name)? {
                    AuthorizationDecision::allow()
                } else {
                    AuthorizationDecision::deny(DenialReason::PolicyNotSatisfied {
                        policy: policy_name.to_string(),
                    })
                }
            }
        };

        Ok(decision)
    }
}

impl Default for AuthorizationService {
    fn default() -> Self {
        Self::new(super::registry::default_policies())
    }
}
