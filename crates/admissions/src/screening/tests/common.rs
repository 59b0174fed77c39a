use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::screening::domain::{
    CertificateTypeId, CountThreshold, ProgramId, QualificationClaim, RawSubjectGrade,
    RequirementRule, SubjectGrade, SubjectGradeRules, SubjectId, SubjectRequirement,
};
use crate::screening::grades::{GradeMappingTable, StandardGrade};
use crate::screening::registry::{
    InMemoryRequirementRegistry, RegistryError, RequirementRegistry,
};
use crate::screening::router::screening_router;
use crate::screening::seed;
use crate::screening::service::ScreeningService;

pub(super) fn mapping_table() -> GradeMappingTable {
    GradeMappingTable::from_rows(seed::standard_grade_mappings()).expect("seed rows are unique")
}

pub(super) fn registry() -> InMemoryRequirementRegistry {
    let mut registry = InMemoryRequirementRegistry::from_rules(seed::demo_requirement_rules());
    registry.insert(
        ProgramId::new("BCOM-ENT"),
        CertificateTypeId::new(seed::COSC),
        RequirementRule::SubjectGrades(cosc_rule()),
    );
    registry
}

/// COSC variant of the entrepreneurship rule so raw numeric grades can be
/// driven through the full normalization path.
pub(super) fn cosc_rule() -> SubjectGradeRules {
    SubjectGradeRules {
        minimum_grades: vec![CountThreshold {
            count: 2,
            grade: StandardGrade::D,
        }],
        subjects: vec![SubjectRequirement {
            subject_id: SubjectId::new("ENG"),
            minimum_grade: StandardGrade::D,
            required: true,
        }],
        subject_groups: Vec::new(),
    }
}

/// The literal rule from the faculty handbook: three C grades, two D grades,
/// and a D in English.
pub(super) fn entrepreneurship_rule() -> SubjectGradeRules {
    SubjectGradeRules {
        minimum_grades: vec![
            CountThreshold {
                count: 3,
                grade: StandardGrade::C,
            },
            CountThreshold {
                count: 2,
                grade: StandardGrade::D,
            },
        ],
        subjects: vec![SubjectRequirement {
            subject_id: SubjectId::new("ENG"),
            minimum_grade: StandardGrade::D,
            required: true,
        }],
        subject_groups: Vec::new(),
    }
}

pub(super) fn build_service() -> ScreeningService<InMemoryRequirementRegistry> {
    ScreeningService::new(
        Arc::new(registry()),
        Arc::new(mapping_table()),
        Arc::new(seed::demo_subject_catalog()),
        seed::standard_certificate_types(),
    )
}

pub(super) fn normalized(entries: &[(&str, StandardGrade)]) -> Vec<SubjectGrade> {
    entries
        .iter()
        .map(|(subject, grade)| SubjectGrade {
            subject_id: SubjectId::new(*subject),
            grade: *grade,
        })
        .collect()
}

pub(super) fn raw(entries: &[(&str, &str)]) -> Vec<RawSubjectGrade> {
    entries
        .iter()
        .map(|(subject, grade)| RawSubjectGrade {
            subject_id: SubjectId::new(*subject),
            grade: (*grade).to_string(),
        })
        .collect()
}

pub(super) fn subject_claim(entries: &[(&str, &str)]) -> QualificationClaim {
    QualificationClaim::SubjectGrades {
        grades: raw(entries),
    }
}

pub(super) fn screening_router_with_service(
    service: ScreeningService<InMemoryRequirementRegistry>,
) -> axum::Router {
    screening_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

/// Registry stub simulating storage that is down.
pub(super) struct UnavailableRegistry;

impl RequirementRegistry for UnavailableRegistry {
    fn lookup(
        &self,
        _program: &ProgramId,
        _certificate_type: &CertificateTypeId,
    ) -> Result<Option<RequirementRule>, RegistryError> {
        Err(RegistryError::Unavailable("rule store offline".to_string()))
    }
}
