//! Pure eligibility evaluators. No I/O, no shared state: the same rule and
//! grades always produce the identical result.

mod classification;
mod subject_grades;

pub use classification::evaluate_classification;
pub use subject_grades::evaluate_subject_grades;
