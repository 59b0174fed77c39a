use super::super::domain::{
    CountThreshold, EligibilityResult, SubjectGrade, SubjectGradeRules, SubjectId,
};
use super::super::grades::StandardGrade;

/// Evaluate a subject-grades rule against an applicant's normalized grades.
///
/// Three gates run over the same grade list: named required subjects and
/// groups, then the count thresholds, then advantageous entries for reporting
/// only. A grade may do double duty across gates 1 and 2; claiming is scoped
/// to the count gate alone.
pub fn evaluate_subject_grades(
    rule: &SubjectGradeRules,
    grades: &[SubjectGrade],
) -> EligibilityResult {
    let subjects = check_subject_requirements(rule, grades);
    let thresholds = claim_count_thresholds(&rule.minimum_grades, grades);

    let eligible = subjects.failures.is_empty() && thresholds.failures.is_empty();

    let mut reasons = Vec::new();
    reasons.extend(subjects.failures);
    reasons.extend(thresholds.failures);
    reasons.extend(subjects.advisories);

    EligibilityResult {
        eligible,
        reasons,
        matched_thresholds: thresholds.matched,
        satisfied_required_subjects: subjects.satisfied,
    }
}

struct SubjectOutcome {
    satisfied: Vec<SubjectId>,
    failures: Vec<String>,
    advisories: Vec<String>,
}

/// Gates 1 and 3: named subjects and groups. Required entries fail the
/// evaluation when unmet; advantageous entries only annotate it.
fn check_subject_requirements(rule: &SubjectGradeRules, grades: &[SubjectGrade]) -> SubjectOutcome {
    let mut outcome = SubjectOutcome {
        satisfied: Vec::new(),
        failures: Vec::new(),
        advisories: Vec::new(),
    };

    for requirement in &rule.subjects {
        let held = best_grade(grades, &requirement.subject_id);
        match held {
            Some(grade) if grade >= requirement.minimum_grade => {
                record_satisfied(&mut outcome.satisfied, requirement.subject_id.clone());
                if !requirement.required {
                    outcome.advisories.push(format!(
                        "advantageous subject {} met at {}",
                        requirement.subject_id, grade
                    ));
                }
            }
            Some(grade) if requirement.required => {
                outcome.failures.push(format!(
                    "{} requires at least {}, found {}",
                    requirement.subject_id, requirement.minimum_grade, grade
                ));
            }
            None if requirement.required => {
                outcome.failures.push(format!(
                    "{} requires at least {}, no grade presented",
                    requirement.subject_id, requirement.minimum_grade
                ));
            }
            _ => {}
        }
    }

    for group in &rule.subject_groups {
        let best = group
            .subject_ids
            .iter()
            .filter_map(|id| best_grade(grades, id).map(|grade| (id, grade)))
            .filter(|(_, grade)| *grade >= group.minimum_grade)
            .max_by_key(|(_, grade)| *grade);

        match best {
            Some((subject_id, grade)) => {
                record_satisfied(&mut outcome.satisfied, subject_id.clone());
                if !group.required {
                    outcome.advisories.push(format!(
                        "advantageous group '{}' met by {} at {}",
                        group.name, subject_id, grade
                    ));
                }
            }
            None if group.required => {
                let members = group
                    .subject_ids
                    .iter()
                    .map(|id| id.0.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                outcome.failures.push(format!(
                    "group '{}' requires at least {} in one of {}",
                    group.name, group.minimum_grade, members
                ));
            }
            None => {}
        }
    }

    outcome
}

struct ThresholdOutcome {
    matched: Vec<CountThreshold>,
    failures: Vec<String>,
}

/// Gate 2: greedy allocation without reuse. Thresholds are walked strictest
/// first and each claims the highest still-unclaimed qualifying grades, so a
/// feasible assignment is never reported as a failure: any grade good enough
/// for a strict floor also clears every looser floor, but not the reverse.
fn claim_count_thresholds(
    thresholds: &[CountThreshold],
    grades: &[SubjectGrade],
) -> ThresholdOutcome {
    let mut ordered: Vec<CountThreshold> = thresholds.to_vec();
    ordered.sort_by(|a, b| b.grade.cmp(&a.grade));

    let mut pool: Vec<StandardGrade> = grades.iter().map(|entry| entry.grade).collect();
    pool.sort_by(|a, b| b.cmp(a));
    let mut claimed = vec![false; pool.len()];

    let mut outcome = ThresholdOutcome {
        matched: Vec::new(),
        failures: Vec::new(),
    };

    for threshold in ordered {
        let wanted = usize::from(threshold.count);
        let mut taken = 0;
        for (index, grade) in pool.iter().enumerate() {
            if taken == wanted {
                break;
            }
            if !claimed[index] && *grade >= threshold.grade {
                claimed[index] = true;
                taken += 1;
            }
        }

        if taken == wanted {
            outcome.matched.push(threshold);
        } else {
            outcome.failures.push(format!(
                "requires {} subjects at grade {} or better, short by {}",
                threshold.count,
                threshold.grade,
                wanted - taken
            ));
        }
    }

    outcome
}

fn best_grade(grades: &[SubjectGrade], subject_id: &SubjectId) -> Option<StandardGrade> {
    grades
        .iter()
        .filter(|entry| &entry.subject_id == subject_id)
        .map(|entry| entry.grade)
        .max()
}

fn record_satisfied(satisfied: &mut Vec<SubjectId>, subject_id: SubjectId) {
    if !satisfied.contains(&subject_id) {
        satisfied.push(subject_id);
    }
}
