//! Seeded screening data: the standard certifying bodies, their grade
//! mapping rows, a demo subject catalog, and sample program rules. In
//! production these tables are administered rows loaded from storage; the
//! shapes here are the same plain records.

use super::domain::{
    CertificateType, CertificateTypeId, ClassificationRules, CountThreshold, GradingType,
    ProgramId, RequirementRule, SubjectCatalog, SubjectGradeRules, SubjectGroupRequirement,
    SubjectId, SubjectRequirement,
};
use super::grades::{Classification, GradeMapping, StandardGrade};

pub const LGCSE: &str = "LGCSE";
pub const COSC: &str = "COSC";
pub const NSC: &str = "NSC";
pub const IGCSE: &str = "IGCSE";
pub const GCE_AS_A_LEVEL: &str = "GCE-AS-A";
pub const DIPLOMA: &str = "DIPLOMA";

/// Certifying bodies the standard seed covers.
pub fn standard_certificate_types() -> Vec<CertificateType> {
    vec![
        CertificateType {
            id: CertificateTypeId::new(LGCSE),
            name: "Lesotho General Certificate of Secondary Education".to_string(),
            grading_type: GradingType::SubjectGrades,
        },
        CertificateType {
            id: CertificateTypeId::new(COSC),
            name: "Cambridge Overseas School Certificate".to_string(),
            grading_type: GradingType::SubjectGrades,
        },
        CertificateType {
            id: CertificateTypeId::new(NSC),
            name: "National Senior Certificate".to_string(),
            grading_type: GradingType::SubjectGrades,
        },
        CertificateType {
            id: CertificateTypeId::new(IGCSE),
            name: "International General Certificate of Secondary Education".to_string(),
            grading_type: GradingType::SubjectGrades,
        },
        CertificateType {
            id: CertificateTypeId::new(GCE_AS_A_LEVEL),
            name: "GCE AS/A-Level".to_string(),
            grading_type: GradingType::SubjectGrades,
        },
        CertificateType {
            id: CertificateTypeId::new(DIPLOMA),
            name: "Post-secondary Diploma".to_string(),
            grading_type: GradingType::Classification,
        },
    ]
}

/// Cambridge-style letter scales: G collapses onto F on the standard scale.
const LETTER_SCALE: &[(&str, StandardGrade)] = &[
    ("A*", StandardGrade::AStar),
    ("A", StandardGrade::A),
    ("B", StandardGrade::B),
    ("C", StandardGrade::C),
    ("D", StandardGrade::D),
    ("E", StandardGrade::E),
    ("F", StandardGrade::F),
    ("G", StandardGrade::F),
    ("U", StandardGrade::U),
];

/// COSC numeric scale, ascending 1-9 with 1 best. The mapping is non-linear:
/// two numeric points can land on one standard grade.
const COSC_SCALE: &[(&str, StandardGrade)] = &[
    ("1", StandardGrade::AStar),
    ("2", StandardGrade::A),
    ("3", StandardGrade::A),
    ("4", StandardGrade::B),
    ("5", StandardGrade::C),
    ("6", StandardGrade::C),
    ("7", StandardGrade::D),
    ("8", StandardGrade::E),
    ("9", StandardGrade::U),
];

/// NSC numeric scale, descending 7-1 with 7 best.
const NSC_SCALE: &[(&str, StandardGrade)] = &[
    ("7", StandardGrade::A),
    ("6", StandardGrade::B),
    ("5", StandardGrade::C),
    ("4", StandardGrade::D),
    ("3", StandardGrade::E),
    ("2", StandardGrade::F),
    ("1", StandardGrade::U),
];

/// GCE AS/A-Level results are issued in both casings; both are stored so the
/// table, not the evaluator, owns the casing policy.
const GCE_SCALE: &[(&str, StandardGrade)] = &[
    ("A", StandardGrade::A),
    ("a", StandardGrade::A),
    ("B", StandardGrade::B),
    ("b", StandardGrade::B),
    ("C", StandardGrade::C),
    ("c", StandardGrade::C),
    ("D", StandardGrade::D),
    ("d", StandardGrade::D),
    ("E", StandardGrade::E),
    ("e", StandardGrade::E),
    ("U", StandardGrade::U),
    ("u", StandardGrade::U),
];

/// The full standard mapping table as administered rows.
pub fn standard_grade_mappings() -> Vec<GradeMapping> {
    let mut rows = Vec::new();
    push_scale(&mut rows, LGCSE, LETTER_SCALE);
    push_scale(&mut rows, IGCSE, LETTER_SCALE);
    push_scale(&mut rows, COSC, COSC_SCALE);
    push_scale(&mut rows, NSC, NSC_SCALE);
    push_scale(&mut rows, GCE_AS_A_LEVEL, GCE_SCALE);
    rows
}

fn push_scale(rows: &mut Vec<GradeMapping>, certificate_type: &str, scale: &[(&str, StandardGrade)]) {
    for (token, grade) in scale {
        rows.push(GradeMapping {
            certificate_type: CertificateTypeId::new(certificate_type),
            original_grade: (*token).to_string(),
            standard_grade: *grade,
        });
    }
}

/// Subject catalog used by demos and tests.
pub fn demo_subject_catalog() -> SubjectCatalog {
    SubjectCatalog::from_entries(
        [
            ("ENG", "English Language"),
            ("MATH", "Mathematics"),
            ("PHSC", "Physical Science"),
            ("BIO", "Biology"),
            ("GEO", "Geography"),
            ("HIST", "History"),
            ("ART", "Art and Design"),
            ("BUS", "Business Studies"),
            ("ACC", "Accounting"),
            ("ICT", "Information and Communication Technology"),
            ("SES", "Sesotho"),
        ]
        .into_iter()
        .map(|(id, name)| (SubjectId::new(id), name.to_string())),
    )
}

/// Sample admission rules mirroring how faculties author them: general count
/// thresholds plus named required subjects, and a separate diploma route for
/// advanced entry.
pub fn demo_requirement_rules() -> Vec<(ProgramId, CertificateTypeId, RequirementRule)> {
    let entrepreneurship_lgcse = RequirementRule::SubjectGrades(SubjectGradeRules {
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
        subjects: vec![
            SubjectRequirement {
                subject_id: SubjectId::new("ENG"),
                minimum_grade: StandardGrade::D,
                required: true,
            },
            SubjectRequirement {
                subject_id: SubjectId::new("MATH"),
                minimum_grade: StandardGrade::C,
                required: false,
            },
        ],
        subject_groups: vec![SubjectGroupRequirement {
            name: "commercial subject".to_string(),
            subject_ids: vec![SubjectId::new("BUS"), SubjectId::new("ACC")],
            minimum_grade: StandardGrade::C,
            required: false,
        }],
    });

    let entrepreneurship_diploma = RequirementRule::Classification(ClassificationRules {
        minimum_classification: Classification::Pass,
        courses: vec![
            "Diploma in Business Management".to_string(),
            "Diploma in Commerce".to_string(),
        ],
    });

    let computing_lgcse = RequirementRule::SubjectGrades(SubjectGradeRules {
        minimum_grades: vec![
            CountThreshold {
                count: 2,
                grade: StandardGrade::B,
            },
            CountThreshold {
                count: 3,
                grade: StandardGrade::C,
            },
        ],
        subjects: vec![
            SubjectRequirement {
                subject_id: SubjectId::new("MATH"),
                minimum_grade: StandardGrade::B,
                required: true,
            },
            SubjectRequirement {
                subject_id: SubjectId::new("ENG"),
                minimum_grade: StandardGrade::C,
                required: true,
            },
        ],
        subject_groups: vec![SubjectGroupRequirement {
            name: "science subject".to_string(),
            subject_ids: vec![SubjectId::new("PHSC"), SubjectId::new("BIO")],
            minimum_grade: StandardGrade::C,
            required: true,
        }],
    });

    vec![
        (
            ProgramId::new("BCOM-ENT"),
            CertificateTypeId::new(LGCSE),
            entrepreneurship_lgcse,
        ),
        (
            ProgramId::new("BCOM-ENT"),
            CertificateTypeId::new(DIPLOMA),
            entrepreneurship_diploma,
        ),
        (
            ProgramId::new("BSC-CS"),
            CertificateTypeId::new(LGCSE),
            computing_lgcse,
        ),
    ]
}
