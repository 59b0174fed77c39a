use std::collections::HashMap;

use super::domain::{CertificateTypeId, ProgramId, RequirementRule};

/// Read-only lookup of the single active rule for a (program, certificate
/// type) pair. Injected so tests and the demo can substitute an in-memory
/// registry without touching real seed data.
///
/// `Ok(None)` means no rule is defined for the pair — an expected outcome,
/// distinct from both ineligibility and registry failure.
pub trait RequirementRegistry: Send + Sync {
    fn lookup(
        &self,
        program: &ProgramId,
        certificate_type: &CertificateTypeId,
    ) -> Result<Option<RequirementRule>, RegistryError>;
}

/// Error enumeration for registry failures.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("requirement registry unavailable: {0}")]
    Unavailable(String),
}

/// In-memory registry backing tests, demos, and the API service.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRequirementRegistry {
    rules: HashMap<(ProgramId, CertificateTypeId), RequirementRule>,
}

impl InMemoryRequirementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the rule for a pair, returning the displaced rule
    /// when one was already registered.
    pub fn insert(
        &mut self,
        program: ProgramId,
        certificate_type: CertificateTypeId,
        rule: RequirementRule,
    ) -> Option<RequirementRule> {
        self.rules.insert((program, certificate_type), rule)
    }

    pub fn from_rules(
        rules: impl IntoIterator<Item = (ProgramId, CertificateTypeId, RequirementRule)>,
    ) -> Self {
        let mut registry = Self::new();
        for (program, certificate_type, rule) in rules {
            registry.insert(program, certificate_type, rule);
        }
        registry
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl RequirementRegistry for InMemoryRequirementRegistry {
    fn lookup(
        &self,
        program: &ProgramId,
        certificate_type: &CertificateTypeId,
    ) -> Result<Option<RequirementRule>, RegistryError> {
        Ok(self
            .rules
            .get(&(program.clone(), certificate_type.clone()))
            .cloned())
    }
}
