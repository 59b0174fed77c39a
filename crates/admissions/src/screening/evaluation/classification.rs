use super::super::domain::{ClassificationRules, EligibilityResult, PriorQualification};

/// Evaluate a classification rule against a prior qualification: the course
/// title must appear on the curated allow-list (exact, case-sensitive) and
/// the award rank must meet the minimum. No count logic applies here.
pub fn evaluate_classification(
    rule: &ClassificationRules,
    applicant: &PriorQualification,
) -> EligibilityResult {
    let mut reasons = Vec::new();

    let recognized = rule
        .courses
        .iter()
        .any(|course| course == &applicant.course_title);

    if !recognized {
        reasons.push(format!(
            "qualification '{}' not recognized for this program",
            applicant.course_title
        ));
    } else if applicant.classification < rule.minimum_classification {
        reasons.push(format!(
            "classification {} is below the required {}",
            applicant.classification, rule.minimum_classification
        ));
    }

    EligibilityResult {
        eligible: reasons.is_empty(),
        reasons,
        matched_thresholds: Vec::new(),
        satisfied_required_subjects: Vec::new(),
    }
}
