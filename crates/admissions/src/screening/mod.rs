//! Eligibility screening: grade normalization, the requirement rule model,
//! and the deterministic evaluator behind every admission decision.

pub mod domain;
pub(crate) mod evaluation;
pub mod grades;
pub mod registry;
pub mod router;
pub mod seed;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    CertificateType, CertificateTypeId, ClassificationRules, CountThreshold, EligibilityResult,
    GradingType, PriorQualification, ProgramId, QualificationClaim, RawSubjectGrade,
    RequirementRule, SubjectCatalog, SubjectGrade, SubjectGradeRules, SubjectGroupRequirement,
    SubjectId, SubjectRequirement,
};
pub use evaluation::{evaluate_classification, evaluate_subject_grades};
pub use grades::{
    Classification, GradeMapping, GradeMappingError, GradeMappingTable, StandardGrade,
    UnmappedGrade,
};
pub use registry::{InMemoryRequirementRegistry, RegistryError, RequirementRegistry};
pub use router::{screening_router, ScreeningDecisionView};
pub use service::{ScreeningError, ScreeningService};
