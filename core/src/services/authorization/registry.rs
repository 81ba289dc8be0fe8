//! Process-wide policy registry

use std::collections::HashMap;
use std::sync::Arc;

use sr_shared::constants::{
    APPLICATION_ID_CLAIM, FRONT_END_APPLICATION_ID, FRONT_END_APPLICATION_POLICY,
};

use crate::errors::AuthError;

use super::policy::Policy;

/// Immutable map of policy name to policy. Cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct PolicyRegistry {
    policies: Arc<HashMap<String, Policy>>,
}

impl PolicyRegistry {
    pub fn builder() -> PolicyRegistryBuilder {
        PolicyRegistryBuilder::default()
    }

    pub fn get(&self, name: &str) -> Option<&Policy> {
        self.policies.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.policies.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    /// Checks at startup that every policy a handler refers to exists
    pub fn ensure_registered(&self, names: &[&str]) -> Result<(), AuthError> {
        match names.iter().find(|name| !self.contains(name)) {
            Some(missing) => Err(AuthError::UnknownPolicy {
                policy: missing.to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Default)]
pub struct PolicyRegistryBuilder {
    policies: HashMap<String, Policy>,
}

impl PolicyRegistryBuilder {
    /// Adds a policy; a later policy with the same name replaces the earlier one
    pub fn add(mut self, policy: Policy) -> Self {
        self.policies.insert(policy.name().to_string(), policy);
        self
    }

    pub fn build(self) -> PolicyRegistry {
        PolicyRegistry {
            policies: Arc::new(self.policies),
        }
    }
}

/// Policies used by the student records API
pub fn default_policies() -> PolicyRegistry {
    PolicyRegistry::builder()
        .add(
            Policy::new(FRONT_END_APPLICATION_POLICY)
                .require_claim(APPLICATION_ID_CLAIM, FRONT_END_APPLICATION_ID),
        )
        .build()
}
