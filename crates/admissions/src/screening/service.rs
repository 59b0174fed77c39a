use std::collections::HashMap;
use std::sync::Arc;

use super::domain::{
    CertificateType, CertificateTypeId, EligibilityResult, GradingType, ProgramId,
    QualificationClaim, RawSubjectGrade, RequirementRule, SubjectCatalog, SubjectGrade, SubjectId,
};
use super::evaluation::{evaluate_classification, evaluate_subject_grades};
use super::grades::{GradeMappingTable, StandardGrade, UnmappedGrade};
use super::registry::{RegistryError, RequirementRegistry};

/// Facade composing the mapping table, subject catalog, certificate-type
/// descriptors, and requirement registry. All data is immutable once the
/// service is built, so screening a batch of applicants concurrently needs
/// no locking.
pub struct ScreeningService<R> {
    registry: Arc<R>,
    mappings: Arc<GradeMappingTable>,
    catalog: Arc<SubjectCatalog>,
    certificate_types: HashMap<CertificateTypeId, CertificateType>,
}

impl<R> ScreeningService<R>
where
    R: RequirementRegistry + 'static,
{
    pub fn new(
        registry: Arc<R>,
        mappings: Arc<GradeMappingTable>,
        catalog: Arc<SubjectCatalog>,
        certificate_types: Vec<CertificateType>,
    ) -> Self {
        let certificate_types = certificate_types
            .into_iter()
            .map(|descriptor| (descriptor.id.clone(), descriptor))
            .collect();

        Self {
            registry,
            mappings,
            catalog,
            certificate_types,
        }
    }

    /// Normalize one raw grade token for a known certificate type.
    pub fn normalize_grade(
        &self,
        certificate_type: &CertificateTypeId,
        raw_grade: &str,
    ) -> Result<StandardGrade, ScreeningError> {
        self.descriptor(certificate_type)?;
        Ok(self.mappings.normalize(certificate_type, raw_grade)?)
    }

    /// Fetch the active rule for a pair. `Ok(None)` means no rule is defined,
    /// which callers must not conflate with ineligibility.
    pub fn lookup_rule(
        &self,
        program: &ProgramId,
        certificate_type: &CertificateTypeId,
    ) -> Result<Option<RequirementRule>, ScreeningError> {
        self.descriptor(certificate_type)?;
        Ok(self.registry.lookup(program, certificate_type)?)
    }

    /// Screen one qualification claim against the program's rule for that
    /// certificate type: validate the boundary, normalize, evaluate.
    pub fn screen(
        &self,
        program: &ProgramId,
        certificate_type: &CertificateTypeId,
        claim: &QualificationClaim,
    ) -> Result<EligibilityResult, ScreeningError> {
        let descriptor = self.descriptor(certificate_type)?;
        self.check_claim_shape(descriptor, claim)?;

        let rule = self
            .registry
            .lookup(program, certificate_type)?
            .ok_or_else(|| ScreeningError::RuleNotFound {
                program: program.clone(),
                certificate_type: certificate_type.clone(),
            })?;

        match (&rule, claim) {
            (RequirementRule::SubjectGrades(rule), QualificationClaim::SubjectGrades { grades }) => {
                let normalized = self.normalize_claim(certificate_type, grades)?;
                Ok(evaluate_subject_grades(rule, &normalized))
            }
            (
                RequirementRule::Classification(rule),
                QualificationClaim::PriorQualification { qualification },
            ) => Ok(evaluate_classification(rule, qualification)),
            (RequirementRule::SubjectGrades(_), _) => Err(ScreeningError::ClaimMismatch {
                certificate_type: certificate_type.clone(),
                expected: GradingType::SubjectGrades.label(),
            }),
            (RequirementRule::Classification(_), _) => Err(ScreeningError::ClaimMismatch {
                certificate_type: certificate_type.clone(),
                expected: GradingType::Classification.label(),
            }),
        }
    }

    fn descriptor(
        &self,
        certificate_type: &CertificateTypeId,
    ) -> Result<&CertificateType, ScreeningError> {
        self.certificate_types
            .get(certificate_type)
            .ok_or_else(|| ScreeningError::UnknownCertificateType(certificate_type.clone()))
    }

    fn check_claim_shape(
        &self,
        descriptor: &CertificateType,
        claim: &QualificationClaim,
    ) -> Result<(), ScreeningError> {
        let matches = match (descriptor.grading_type, claim) {
            (GradingType::SubjectGrades, QualificationClaim::SubjectGrades { .. }) => true,
            (GradingType::Classification, QualificationClaim::PriorQualification { .. }) => true,
            _ => false,
        };

        if matches {
            Ok(())
        } else {
            Err(ScreeningError::ClaimMismatch {
                certificate_type: descriptor.id.clone(),
                expected: descriptor.grading_type.label(),
            })
        }
    }

    fn normalize_claim(
        &self,
        certificate_type: &CertificateTypeId,
        grades: &[RawSubjectGrade],
    ) -> Result<Vec<SubjectGrade>, ScreeningError> {
        grades
            .iter()
            .map(|raw| {
                if !self.catalog.contains(&raw.subject_id) {
                    return Err(ScreeningError::UnknownSubject(raw.subject_id.clone()));
                }
                let grade = self.mappings.normalize(certificate_type, &raw.grade)?;
                Ok(SubjectGrade {
                    subject_id: raw.subject_id.clone(),
                    grade,
                })
            })
            .collect()
    }
}

/// Error raised at the screening boundary. Ineligibility is not an error;
/// it arrives as a fully-formed `EligibilityResult`.
#[derive(Debug, thiserror::Error)]
pub enum ScreeningError {
    #[error("unknown certificate type '{0}'")]
    UnknownCertificateType(CertificateTypeId),
    #[error("unknown subject '{0}'")]
    UnknownSubject(SubjectId),
    #[error(transparent)]
    UnmappedGrade(#[from] UnmappedGrade),
    #[error("no admission rule for program '{program}' and certificate type '{certificate_type}'")]
    RuleNotFound {
        program: ProgramId,
        certificate_type: CertificateTypeId,
    },
    #[error("certificate type '{certificate_type}' expects a {expected} claim")]
    ClaimMismatch {
        certificate_type: CertificateTypeId,
        expected: &'static str,
    },
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
