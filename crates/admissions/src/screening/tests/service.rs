use super::common::*;
use crate::screening::domain::{
    CertificateTypeId, PriorQualification, ProgramId, QualificationClaim, SubjectId,
};
use crate::screening::grades::{Classification, StandardGrade};
use crate::screening::seed;
use crate::screening::service::ScreeningError;

#[test]
fn screens_raw_lgcse_grades_end_to_end() {
    let service = build_service();
    let claim = subject_claim(&[
        ("ENG", "D"),
        ("MATH", "C"),
        ("ART", "C"),
        ("BUS", "C"),
        ("GEO", "D"),
    ]);

    let result = service
        .screen(
            &ProgramId::new("BCOM-ENT"),
            &CertificateTypeId::new(seed::LGCSE),
            &claim,
        )
        .expect("screening completes");

    assert!(result.eligible, "unexpected reasons: {:?}", result.reasons);
    assert!(result
        .satisfied_required_subjects
        .contains(&SubjectId::new("ENG")));
}

#[test]
fn cosc_nine_normalizes_to_u_and_fails_the_required_subject() {
    let service = build_service();
    let claim = subject_claim(&[("ENG", "9"), ("MATH", "5"), ("GEO", "6")]);

    let result = service
        .screen(
            &ProgramId::new("BCOM-ENT"),
            &CertificateTypeId::new(seed::COSC),
            &claim,
        )
        .expect("screening completes");

    assert!(!result.eligible);
    assert!(result
        .reasons
        .iter()
        .any(|reason| reason.contains("ENG requires at least D, found U")));
}

#[test]
fn diploma_route_accepts_recognized_credit() {
    let service = build_service();
    let claim = QualificationClaim::PriorQualification {
        qualification: PriorQualification {
            course_title: "Diploma in Business Management".to_string(),
            classification: Classification::Credit,
            awarded_on: None,
        },
    };

    let result = service
        .screen(
            &ProgramId::new("BCOM-ENT"),
            &CertificateTypeId::new(seed::DIPLOMA),
            &claim,
        )
        .expect("screening completes");

    assert!(result.eligible);
}

#[test]
fn missing_rule_is_an_error_not_an_ineligible_result() {
    let service = build_service();
    let claim = subject_claim(&[("ENG", "A")]);

    let error = service
        .screen(
            &ProgramId::new("BSC-NURSING"),
            &CertificateTypeId::new(seed::LGCSE),
            &claim,
        )
        .expect_err("no rule is defined for this program");

    assert!(matches!(error, ScreeningError::RuleNotFound { .. }));
}

#[test]
fn unknown_certificate_type_is_rejected_at_the_boundary() {
    let service = build_service();
    let claim = subject_claim(&[("ENG", "A")]);

    let error = service
        .screen(
            &ProgramId::new("BCOM-ENT"),
            &CertificateTypeId::new("MATRIC"),
            &claim,
        )
        .expect_err("certificate type is not seeded");

    assert!(matches!(error, ScreeningError::UnknownCertificateType(_)));
}

#[test]
fn unknown_subject_is_rejected_before_evaluation() {
    let service = build_service();
    let claim = subject_claim(&[("XYZ", "A")]);

    let error = service
        .screen(
            &ProgramId::new("BCOM-ENT"),
            &CertificateTypeId::new(seed::LGCSE),
            &claim,
        )
        .expect_err("subject is not in the catalog");

    assert!(matches!(error, ScreeningError::UnknownSubject(id) if id == SubjectId::new("XYZ")));
}

#[test]
fn unmapped_grade_token_propagates_as_an_error() {
    let service = build_service();
    let claim = subject_claim(&[("ENG", "Z")]);

    let error = service
        .screen(
            &ProgramId::new("BCOM-ENT"),
            &CertificateTypeId::new(seed::LGCSE),
            &claim,
        )
        .expect_err("Z has no LGCSE mapping");

    assert!(matches!(error, ScreeningError::UnmappedGrade(_)));
}

#[test]
fn classification_claim_against_subject_grades_certificate_is_a_mismatch() {
    let service = build_service();
    let claim = QualificationClaim::PriorQualification {
        qualification: PriorQualification {
            course_title: "Diploma in Commerce".to_string(),
            classification: Classification::Merit,
            awarded_on: None,
        },
    };

    let error = service
        .screen(
            &ProgramId::new("BCOM-ENT"),
            &CertificateTypeId::new(seed::LGCSE),
            &claim,
        )
        .expect_err("LGCSE expects subject grades");

    assert!(matches!(
        error,
        ScreeningError::ClaimMismatch { expected, .. } if expected == "subject-grades"
    ));
}

#[test]
fn lookup_rule_distinguishes_none_from_error() {
    let service = build_service();

    let found = service
        .lookup_rule(
            &ProgramId::new("BCOM-ENT"),
            &CertificateTypeId::new(seed::LGCSE),
        )
        .expect("registry is available");
    assert!(found.is_some());

    let missing = service
        .lookup_rule(
            &ProgramId::new("BCOM-ENT"),
            &CertificateTypeId::new(seed::NSC),
        )
        .expect("registry is available");
    assert!(missing.is_none());
}

#[test]
fn normalize_grade_checks_the_certificate_type_first() {
    let service = build_service();

    assert_eq!(
        service
            .normalize_grade(&CertificateTypeId::new(seed::NSC), "7")
            .expect("NSC 7 is mapped"),
        StandardGrade::A
    );

    let error = service
        .normalize_grade(&CertificateTypeId::new("MATRIC"), "7")
        .expect_err("certificate type is unknown");
    assert!(matches!(error, ScreeningError::UnknownCertificateType(_)));
}
