use std::collections::HashMap;
use std::fmt;
use std::io::Read;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::domain::CertificateTypeId;

/// The single ordered scale every certificate-specific grade collapses into.
/// Variants are declared lowest to highest so the derived ordering backs
/// every "grade X or better" comparison directly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum StandardGrade {
    U,
    F,
    E,
    D,
    C,
    B,
    A,
    #[serde(rename = "A*")]
    AStar,
}

impl StandardGrade {
    pub const fn token(self) -> &'static str {
        match self {
            StandardGrade::U => "U",
            StandardGrade::F => "F",
            StandardGrade::E => "E",
            StandardGrade::D => "D",
            StandardGrade::C => "C",
            StandardGrade::B => "B",
            StandardGrade::A => "A",
            StandardGrade::AStar => "A*",
        }
    }
}

impl fmt::Display for StandardGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for StandardGrade {
    type Err = GradeMappingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "U" => Ok(StandardGrade::U),
            "F" => Ok(StandardGrade::F),
            "E" => Ok(StandardGrade::E),
            "D" => Ok(StandardGrade::D),
            "C" => Ok(StandardGrade::C),
            "B" => Ok(StandardGrade::B),
            "A" => Ok(StandardGrade::A),
            "A*" => Ok(StandardGrade::AStar),
            other => Err(GradeMappingError::UnknownStandardGrade(other.to_string())),
        }
    }
}

/// Overall award ranks for classification-graded qualifications, lowest to
/// highest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Classification {
    Pass,
    Credit,
    Merit,
    Distinction,
}

impl Classification {
    pub const fn label(self) -> &'static str {
        match self {
            Classification::Pass => "Pass",
            Classification::Credit => "Credit",
            Classification::Merit => "Merit",
            Classification::Distinction => "Distinction",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the seeded mapping data: how a certifying body's raw token
/// lands on the standard scale. Kept as plain data so new certifying bodies
/// are onboarded by inserting rows, not shipping code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeMapping {
    pub certificate_type: CertificateTypeId,
    pub original_grade: String,
    pub standard_grade: StandardGrade,
}

/// Raised when a raw grade has no mapping for its certificate type. A hard
/// stop: silently defaulting an unrecognized grade could wrongly reject or
/// wrongly admit an applicant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no grade mapping for certificate type '{certificate_type}' and raw grade '{raw_grade}'")]
pub struct UnmappedGrade {
    pub certificate_type: CertificateTypeId,
    pub raw_grade: String,
}

/// Errors raised while building a mapping table from seed data.
#[derive(Debug, thiserror::Error)]
pub enum GradeMappingError {
    #[error("duplicate grade mapping for certificate type '{certificate_type}' and raw grade '{original_grade}'")]
    DuplicateMapping {
        certificate_type: CertificateTypeId,
        original_grade: String,
    },
    #[error("unknown standard grade token '{0}'")]
    UnknownStandardGrade(String),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Read-only lookup from (certificate type, raw token) to standard grade.
/// Loaded once from administered rows; never mutated during evaluation.
#[derive(Debug, Clone, Default)]
pub struct GradeMappingTable {
    entries: HashMap<(CertificateTypeId, String), StandardGrade>,
}

impl GradeMappingTable {
    /// Build a table from mapping rows, rejecting duplicate
    /// (certificate type, original grade) pairs.
    pub fn from_rows(
        rows: impl IntoIterator<Item = GradeMapping>,
    ) -> Result<Self, GradeMappingError> {
        let mut entries = HashMap::new();
        for row in rows {
            let key = (row.certificate_type.clone(), row.original_grade.clone());
            if entries.insert(key, row.standard_grade).is_some() {
                return Err(GradeMappingError::DuplicateMapping {
                    certificate_type: row.certificate_type,
                    original_grade: row.original_grade,
                });
            }
        }
        Ok(Self { entries })
    }

    /// Load mapping rows from a CSV export with `certificate_type`,
    /// `original_grade`, and `standard_grade` columns.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, GradeMappingError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rows = Vec::new();
        for record in csv_reader.deserialize::<GradeMappingRow>() {
            let row = record?;
            rows.push(GradeMapping {
                certificate_type: CertificateTypeId::new(row.certificate_type),
                original_grade: row.original_grade,
                standard_grade: row.standard_grade.parse()?,
            });
        }

        Self::from_rows(rows)
    }

    /// Exact-match lookup of a raw grade token. Casing variants accepted by a
    /// certifying body are explicit rows in the table, never guessed here.
    pub fn normalize(
        &self,
        certificate_type: &CertificateTypeId,
        raw_grade: &str,
    ) -> Result<StandardGrade, UnmappedGrade> {
        self.entries
            .get(&(certificate_type.clone(), raw_grade.to_string()))
            .copied()
            .ok_or_else(|| UnmappedGrade {
                certificate_type: certificate_type.clone(),
                raw_grade: raw_grade.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct GradeMappingRow {
    certificate_type: String,
    original_grade: String,
    standard_grade: String,
}
