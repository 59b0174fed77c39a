use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use admissions::error::AppError;
use admissions::screening::{
    seed, GradeMappingTable, InMemoryRequirementRegistry, ScreeningService,
};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Assemble a screening service over the seeded standard tables and demo
/// rules. Real deployments would hydrate the registry and mapping table from
/// the admissions database instead.
pub(crate) fn seeded_screening_service(
) -> Result<ScreeningService<InMemoryRequirementRegistry>, AppError> {
    let registry = InMemoryRequirementRegistry::from_rules(seed::demo_requirement_rules());
    let mappings = GradeMappingTable::from_rows(seed::standard_grade_mappings())?;

    Ok(ScreeningService::new(
        Arc::new(registry),
        Arc::new(mappings),
        Arc::new(seed::demo_subject_catalog()),
        seed::standard_certificate_types(),
    ))
}
