use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::grades::{Classification, StandardGrade};

/// Identifier wrapper for catalog subjects (e.g. `ENG`, `MATH`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SubjectId(pub String);

impl SubjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier wrapper for academic programs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProgramId(pub String);

impl ProgramId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ProgramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier wrapper for qualification-issuing systems (e.g. `LGCSE`, `COSC`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CertificateTypeId(pub String);

impl CertificateTypeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for CertificateTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a certifying body reports results: one grade per subject, or a single
/// overall classification for the whole award.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GradingType {
    SubjectGrades,
    Classification,
}

impl GradingType {
    pub const fn label(self) -> &'static str {
        match self {
            GradingType::SubjectGrades => "subject-grades",
            GradingType::Classification => "classification",
        }
    }
}

/// Descriptor for a certificate type known to the screening core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateType {
    pub id: CertificateTypeId,
    pub name: String,
    pub grading_type: GradingType,
}

/// An applicant's grade for one subject, already on the standard scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectGrade {
    pub subject_id: SubjectId,
    pub grade: StandardGrade,
}

/// An applicant's grade as printed on the certificate, before normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSubjectGrade {
    pub subject_id: SubjectId,
    pub grade: String,
}

/// Overall award from a post-secondary qualification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorQualification {
    pub course_title: String,
    pub classification: Classification,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub awarded_on: Option<NaiveDate>,
}

/// What the applicant presents for screening against one certificate type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QualificationClaim {
    SubjectGrades { grades: Vec<RawSubjectGrade> },
    PriorQualification { qualification: PriorQualification },
}

/// A single subject the rule cares about. `required` entries block
/// eligibility when unmet; the rest are advantageous and report-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectRequirement {
    pub subject_id: SubjectId,
    pub minimum_grade: StandardGrade,
    pub required: bool,
}

/// A set of interchangeable subjects; any one member at or above the minimum
/// grade satisfies the entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectGroupRequirement {
    pub name: String,
    pub subject_ids: Vec<SubjectId>,
    pub minimum_grade: StandardGrade,
    pub required: bool,
}

/// "At least `count` subjects at `grade` or better."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountThreshold {
    pub count: u8,
    pub grade: StandardGrade,
}

/// Admission rule for subject-graded certificates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectGradeRules {
    pub minimum_grades: Vec<CountThreshold>,
    pub subjects: Vec<SubjectRequirement>,
    #[serde(default)]
    pub subject_groups: Vec<SubjectGroupRequirement>,
}

/// Admission rule for classification-graded certificates: a curated
/// allow-list of qualification titles plus a minimum award rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRules {
    pub minimum_classification: Classification,
    pub courses: Vec<String>,
}

/// The rule shape a (program, certificate type) pair is screened against.
/// Adding a third kind must break every consumer at compile time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum RequirementRule {
    SubjectGrades(SubjectGradeRules),
    Classification(ClassificationRules),
}

/// Fully-formed screening decision, returned on success and failure alike so
/// the admissions office can render an actionable explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityResult {
    pub eligible: bool,
    pub reasons: Vec<String>,
    pub matched_thresholds: Vec<CountThreshold>,
    pub satisfied_required_subjects: Vec<SubjectId>,
}

/// Canonical subject identities, referenced but not owned by the core.
/// Used at the service boundary to reject unknown ids before evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectCatalog {
    names: BTreeMap<SubjectId, String>,
}

impl SubjectCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (SubjectId, String)>) -> Self {
        Self {
            names: entries.into_iter().collect(),
        }
    }

    pub fn insert(&mut self, id: SubjectId, name: impl Into<String>) {
        self.names.insert(id, name.into());
    }

    pub fn contains(&self, id: &SubjectId) -> bool {
        self.names.contains_key(id)
    }

    pub fn name_of(&self, id: &SubjectId) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
