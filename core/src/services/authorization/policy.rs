//! Policy and requirement definitions

use std::fmt;
use std::sync::Arc;

use crate::domain::entities::Principal;

/// A single condition a principal must meet
pub trait PolicyRequirement: Send + Sync + fmt::Debug {
    fn is_satisfied_by(&self, principal: &Principal) -> bool;
}

/// Requires a claim whose value is one of `allowed_values` (exact match)
#[derive(Debug, Clone)]
pub struct ClaimValueRequirement {
    claim_type: String,
    allowed_values: Vec<String>,
}

impl ClaimValueRequirement {
    pub fn new(claim_type: impl Into<String>, allowed_values: Vec<String>) -> Self {
        Self {
            claim_type: claim_type.into(),
            allowed_values,
        }
    }
}

impl PolicyRequirement for ClaimValueRequirement {
    fn is_satisfied_by(&self, principal: &Principal) -> bool {
        self.allowed_values
            .iter()
            .any(|value| principal.has_claim(&self.claim_type, value))
    }
}

/// A named set of requirements; passes only if every requirement passes
#[derive(Debug, Clone)]
pub struct Policy {
    name: String,
    requirements: Vec<Arc<dyn PolicyRequirement>>,
}

impl Policy {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requirements: Vec::new(),
        }
    }

    /// Adds a requirement for the exact claim/value pair
    pub fn require_claim(self, claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        self.require(ClaimValueRequirement::new(claim_type, vec![value.into()]))
    }

    pub fn require(mut self, requirement: impl PolicyRequirement + 'static) -> Self {
        self.requirements.push(Arc::new(requirement));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// A policy without requirements admits any authenticated principal
    pub fn evaluate(&self, principal: &Principal) -> bool {
        self.requirements
            .iter()
            .all(|requirement| requirement.is_satisfied_by(principal))
    }
}
