use crate::infra::seeded_screening_service;
use admissions::error::AppError;
use admissions::screening::{
    CertificateTypeId, Classification, PriorQualification, ProgramId, QualificationClaim,
    RawSubjectGrade, ScreeningError, SubjectId,
};
use clap::Args;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Only screen applicants for this program id (e.g. BCOM-ENT)
    #[arg(long)]
    pub(crate) program: Option<String>,
}

struct DemoApplicant {
    label: &'static str,
    program: &'static str,
    certificate_type: &'static str,
    claim: QualificationClaim,
}

fn subject_claim(entries: &[(&str, &str)]) -> QualificationClaim {
    QualificationClaim::SubjectGrades {
        grades: entries
            .iter()
            .map(|(subject, grade)| RawSubjectGrade {
                subject_id: SubjectId::new(*subject),
                grade: (*grade).to_string(),
            })
            .collect(),
    }
}

fn sample_applicants() -> Vec<DemoApplicant> {
    vec![
        DemoApplicant {
            label: "LGCSE leaver with a solid commercial transcript",
            program: "BCOM-ENT",
            certificate_type: "LGCSE",
            claim: subject_claim(&[
                ("ENG", "D"),
                ("MATH", "C"),
                ("ART", "C"),
                ("BUS", "C"),
                ("GEO", "D"),
            ]),
        },
        DemoApplicant {
            label: "LGCSE leaver with weak English",
            program: "BCOM-ENT",
            certificate_type: "LGCSE",
            claim: subject_claim(&[
                ("ENG", "E"),
                ("MATH", "C"),
                ("ART", "C"),
                ("BUS", "C"),
                ("GEO", "D"),
            ]),
        },
        DemoApplicant {
            label: "Diploma holder seeking advanced entry",
            program: "BCOM-ENT",
            certificate_type: "DIPLOMA",
            claim: QualificationClaim::PriorQualification {
                qualification: PriorQualification {
                    course_title: "Diploma in Business Management".to_string(),
                    classification: Classification::Credit,
                    awarded_on: None,
                },
            },
        },
        DemoApplicant {
            label: "Strong LGCSE transcript aiming for computing",
            program: "BSC-CS",
            certificate_type: "LGCSE",
            claim: subject_claim(&[
                ("MATH", "A"),
                ("ENG", "B"),
                ("PHSC", "C"),
                ("GEO", "C"),
                ("SES", "C"),
            ]),
        },
    ]
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = seeded_screening_service()?;

    for applicant in sample_applicants() {
        if let Some(filter) = &args.program {
            if filter != applicant.program {
                continue;
            }
        }

        println!(
            "== {} ({} via {})",
            applicant.label, applicant.program, applicant.certificate_type
        );

        let program = ProgramId::new(applicant.program);
        let certificate_type = CertificateTypeId::new(applicant.certificate_type);

        match service.screen(&program, &certificate_type, &applicant.claim) {
            Ok(result) if result.eligible => {
                println!("   eligible");
                for reason in &result.reasons {
                    println!("   note: {reason}");
                }
            }
            Ok(result) => {
                println!("   not eligible");
                for reason in &result.reasons {
                    println!("   reason: {reason}");
                }
            }
            Err(error @ ScreeningError::RuleNotFound { .. }) => {
                println!("   no rule on file: {error}");
            }
            Err(error) => return Err(error.into()),
        }

        println!();
    }

    Ok(())
}
