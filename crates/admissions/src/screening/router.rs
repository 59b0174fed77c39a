use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{
    CertificateTypeId, CountThreshold, EligibilityResult, ProgramId, QualificationClaim, SubjectId,
};
use super::registry::{RegistryError, RequirementRegistry};
use super::service::{ScreeningError, ScreeningService};

/// Router builder exposing the screening endpoints for the admissions
/// application.
pub fn screening_router<R>(service: Arc<ScreeningService<R>>) -> Router
where
    R: RequirementRegistry + 'static,
{
    Router::new()
        .route("/api/v1/screening/decisions", post(decide_handler::<R>))
        .route(
            "/api/v1/screening/programs/:program_id/rules/:certificate_type_id",
            get(rule_handler::<R>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScreeningRequest {
    pub(crate) program_id: String,
    pub(crate) certificate_type_id: String,
    #[serde(flatten)]
    pub(crate) claim: QualificationClaim,
}

/// Decision payload for admissions officers; wraps the core result with the
/// identifiers and screening date.
#[derive(Debug, Serialize)]
pub struct ScreeningDecisionView {
    pub program_id: String,
    pub certificate_type_id: String,
    pub screened_on: NaiveDate,
    pub eligible: bool,
    pub reasons: Vec<String>,
    pub matched_thresholds: Vec<CountThreshold>,
    pub satisfied_required_subjects: Vec<SubjectId>,
}

impl ScreeningDecisionView {
    fn new(program_id: String, certificate_type_id: String, result: EligibilityResult) -> Self {
        Self {
            program_id,
            certificate_type_id,
            screened_on: Local::now().date_naive(),
            eligible: result.eligible,
            reasons: result.reasons,
            matched_thresholds: result.matched_thresholds,
            satisfied_required_subjects: result.satisfied_required_subjects,
        }
    }
}

pub(crate) async fn decide_handler<R>(
    State(service): State<Arc<ScreeningService<R>>>,
    axum::Json(request): axum::Json<ScreeningRequest>,
) -> Response
where
    R: RequirementRegistry + 'static,
{
    let program = ProgramId(request.program_id.clone());
    let certificate_type = CertificateTypeId(request.certificate_type_id.clone());

    match service.screen(&program, &certificate_type, &request.claim) {
        Ok(result) => {
            let view = ScreeningDecisionView::new(
                request.program_id,
                request.certificate_type_id,
                result,
            );
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => screening_error_response(error),
    }
}

pub(crate) async fn rule_handler<R>(
    State(service): State<Arc<ScreeningService<R>>>,
    Path((program_id, certificate_type_id)): Path<(String, String)>,
) -> Response
where
    R: RequirementRegistry + 'static,
{
    let program = ProgramId(program_id);
    let certificate_type = CertificateTypeId(certificate_type_id);

    match service.lookup_rule(&program, &certificate_type) {
        Ok(Some(rule)) => (StatusCode::OK, axum::Json(rule)).into_response(),
        Ok(None) => {
            let payload = json!({
                "error": format!(
                    "no admission rule for program '{program}' and certificate type '{certificate_type}'"
                ),
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(error) => screening_error_response(error),
    }
}

fn screening_error_response(error: ScreeningError) -> Response {
    let status = match &error {
        ScreeningError::RuleNotFound { .. } => StatusCode::NOT_FOUND,
        ScreeningError::Registry(RegistryError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
        ScreeningError::UnknownCertificateType(_)
        | ScreeningError::UnknownSubject(_)
        | ScreeningError::UnmappedGrade(_)
        | ScreeningError::ClaimMismatch { .. } => StatusCode::UNPROCESSABLE_ENTITY,
    };

    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
