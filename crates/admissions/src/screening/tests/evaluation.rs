use super::common::*;
use crate::screening::domain::{
    CountThreshold, SubjectGradeRules, SubjectGroupRequirement, SubjectId, SubjectRequirement,
};
use crate::screening::evaluation::evaluate_subject_grades;
use crate::screening::grades::StandardGrade;

#[test]
fn handbook_rule_admits_a_qualifying_transcript() {
    let rule = entrepreneurship_rule();
    let grades = normalized(&[
        ("ENG", StandardGrade::D),
        ("MATH", StandardGrade::C),
        ("ART", StandardGrade::C),
        ("BUS", StandardGrade::C),
        ("GEO", StandardGrade::D),
    ]);

    let result = evaluate_subject_grades(&rule, &grades);

    assert!(result.eligible, "unexpected reasons: {:?}", result.reasons);
    assert_eq!(result.matched_thresholds.len(), 2);
    assert!(result
        .satisfied_required_subjects
        .contains(&SubjectId::new("ENG")));
}

#[test]
fn weak_english_fails_and_names_the_subject() {
    let rule = entrepreneurship_rule();
    let grades = normalized(&[
        ("ENG", StandardGrade::E),
        ("MATH", StandardGrade::C),
        ("ART", StandardGrade::C),
        ("BUS", StandardGrade::C),
        ("GEO", StandardGrade::D),
    ]);

    let result = evaluate_subject_grades(&rule, &grades);

    assert!(!result.eligible);
    assert!(result
        .reasons
        .iter()
        .any(|reason| reason.contains("ENG requires at least D, found E")));
}

#[test]
fn count_gate_passes_exactly_feasible_transcripts() {
    let rule = entrepreneurship_rule();
    let grades = normalized(&[
        ("ENG", StandardGrade::C),
        ("MATH", StandardGrade::C),
        ("ART", StandardGrade::C),
        ("BUS", StandardGrade::D),
        ("GEO", StandardGrade::D),
    ]);

    let result = evaluate_subject_grades(&rule, &grades);
    assert!(result.eligible, "unexpected reasons: {:?}", result.reasons);
}

#[test]
fn count_gate_reports_the_short_threshold() {
    let rule = entrepreneurship_rule();
    let grades = normalized(&[
        ("ENG", StandardGrade::C),
        ("MATH", StandardGrade::C),
        ("ART", StandardGrade::D),
        ("BUS", StandardGrade::D),
        ("GEO", StandardGrade::D),
    ]);

    let result = evaluate_subject_grades(&rule, &grades);

    assert!(!result.eligible);
    assert!(result
        .reasons
        .iter()
        .any(|reason| reason.contains("3 subjects at grade C or better, short by 1")));
}

#[test]
fn strict_thresholds_claim_high_grades_first() {
    // Claiming loosely would starve the B bucket with the A grade already
    // spent; strictest-first must still admit this transcript.
    let rule = SubjectGradeRules {
        minimum_grades: vec![
            CountThreshold {
                count: 3,
                grade: StandardGrade::C,
            },
            CountThreshold {
                count: 2,
                grade: StandardGrade::B,
            },
        ],
        subjects: Vec::new(),
        subject_groups: Vec::new(),
    };
    let grades = normalized(&[
        ("ENG", StandardGrade::A),
        ("MATH", StandardGrade::B),
        ("ART", StandardGrade::C),
        ("BUS", StandardGrade::C),
        ("GEO", StandardGrade::C),
    ]);

    let result = evaluate_subject_grades(&rule, &grades);
    assert!(result.eligible, "unexpected reasons: {:?}", result.reasons);
    assert_eq!(result.matched_thresholds.len(), 2);
}

#[test]
fn a_grade_claimed_once_is_not_reused() {
    let rule = SubjectGradeRules {
        minimum_grades: vec![
            CountThreshold {
                count: 1,
                grade: StandardGrade::C,
            },
            CountThreshold {
                count: 1,
                grade: StandardGrade::D,
            },
        ],
        subjects: Vec::new(),
        subject_groups: Vec::new(),
    };
    let grades = normalized(&[("ENG", StandardGrade::C)]);

    let result = evaluate_subject_grades(&rule, &grades);

    assert!(!result.eligible);
    assert!(result
        .reasons
        .iter()
        .any(|reason| reason.contains("1 subjects at grade D or better, short by 1")));
}

#[test]
fn required_subject_blocks_despite_satisfied_counts() {
    let mut rule = entrepreneurship_rule();
    rule.subjects.push(SubjectRequirement {
        subject_id: SubjectId::new("MATH"),
        minimum_grade: StandardGrade::C,
        required: true,
    });
    let grades = normalized(&[
        ("ENG", StandardGrade::C),
        ("ART", StandardGrade::C),
        ("BUS", StandardGrade::C),
        ("GEO", StandardGrade::D),
        ("HIST", StandardGrade::D),
    ]);

    let result = evaluate_subject_grades(&rule, &grades);

    assert!(!result.eligible);
    assert!(result
        .reasons
        .iter()
        .any(|reason| reason.contains("MATH requires at least C, no grade presented")));
    assert_eq!(result.matched_thresholds.len(), 2);
}

#[test]
fn group_is_satisfied_by_any_member() {
    let rule = SubjectGradeRules {
        minimum_grades: Vec::new(),
        subjects: Vec::new(),
        subject_groups: vec![SubjectGroupRequirement {
            name: "science subject".to_string(),
            subject_ids: vec![SubjectId::new("PHSC"), SubjectId::new("BIO")],
            minimum_grade: StandardGrade::C,
            required: true,
        }],
    };

    let with_biology = normalized(&[("BIO", StandardGrade::B)]);
    let result = evaluate_subject_grades(&rule, &with_biology);
    assert!(result.eligible);
    assert!(result
        .satisfied_required_subjects
        .contains(&SubjectId::new("BIO")));

    let without_science = normalized(&[("HIST", StandardGrade::A)]);
    let result = evaluate_subject_grades(&rule, &without_science);
    assert!(!result.eligible);
    assert!(result
        .reasons
        .iter()
        .any(|reason| reason.contains("group 'science subject' requires at least C")));
}

#[test]
fn advantageous_entries_never_block() {
    let rule = SubjectGradeRules {
        minimum_grades: vec![CountThreshold {
            count: 1,
            grade: StandardGrade::D,
        }],
        subjects: vec![SubjectRequirement {
            subject_id: SubjectId::new("MATH"),
            minimum_grade: StandardGrade::B,
            required: false,
        }],
        subject_groups: Vec::new(),
    };
    let grades = normalized(&[("ENG", StandardGrade::D), ("MATH", StandardGrade::E)]);

    let result = evaluate_subject_grades(&rule, &grades);
    assert!(result.eligible, "unexpected reasons: {:?}", result.reasons);
}

#[test]
fn advantageous_entries_are_reported_when_met() {
    let rule = SubjectGradeRules {
        minimum_grades: Vec::new(),
        subjects: vec![SubjectRequirement {
            subject_id: SubjectId::new("MATH"),
            minimum_grade: StandardGrade::C,
            required: false,
        }],
        subject_groups: Vec::new(),
    };
    let grades = normalized(&[("MATH", StandardGrade::B)]);

    let result = evaluate_subject_grades(&rule, &grades);

    assert!(result.eligible);
    assert!(result
        .satisfied_required_subjects
        .contains(&SubjectId::new("MATH")));
    assert!(result
        .reasons
        .iter()
        .any(|reason| reason.contains("advantageous subject MATH met at B")));
}

#[test]
fn a_grade_serves_both_the_named_subject_and_the_counts() {
    let rule = SubjectGradeRules {
        minimum_grades: vec![CountThreshold {
            count: 1,
            grade: StandardGrade::C,
        }],
        subjects: vec![SubjectRequirement {
            subject_id: SubjectId::new("ENG"),
            minimum_grade: StandardGrade::C,
            required: true,
        }],
        subject_groups: Vec::new(),
    };
    let grades = normalized(&[("ENG", StandardGrade::C)]);

    let result = evaluate_subject_grades(&rule, &grades);
    assert!(result.eligible, "unexpected reasons: {:?}", result.reasons);
}

#[test]
fn evaluation_is_idempotent() {
    let rule = entrepreneurship_rule();
    let grades = normalized(&[
        ("ENG", StandardGrade::D),
        ("MATH", StandardGrade::C),
        ("ART", StandardGrade::C),
        ("BUS", StandardGrade::C),
        ("GEO", StandardGrade::D),
    ]);

    let first = evaluate_subject_grades(&rule, &grades);
    let second = evaluate_subject_grades(&rule, &grades);
    assert_eq!(first, second);
}

#[test]
fn improving_a_grade_never_revokes_eligibility() {
    let rule = entrepreneurship_rule();
    let mut grades = normalized(&[
        ("ENG", StandardGrade::D),
        ("MATH", StandardGrade::C),
        ("ART", StandardGrade::C),
        ("BUS", StandardGrade::C),
        ("GEO", StandardGrade::D),
    ]);

    assert!(evaluate_subject_grades(&rule, &grades).eligible);

    for index in 0..grades.len() {
        let original = grades[index].grade;
        grades[index].grade = StandardGrade::AStar;
        assert!(
            evaluate_subject_grades(&rule, &grades).eligible,
            "raising {} broke eligibility",
            grades[index].subject_id
        );
        grades[index].grade = original;
    }
}
