use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::services::RiskAnalysisError;
use crate::domain::SkipDoseReport;
use crate::presentation::state::AppState;

use super::error_response::error_response;

#[tracing::instrument(skip(state, report), fields(drug = %report.drug_name))]
pub async fn analyze_skip_handler(
    State(state): State<AppState>,
    Json(report): Json<SkipDoseReport>,
) -> impl IntoResponse {
    match state.risk_analysis_service.analyze(&report).await {
        Ok(analysis) => (StatusCode::OK, Json(analysis)).into_response(),
        Err(e @ RiskAnalysisError::DrugNotFound(_)) => {
            tracing::info!(error = %e, "Risk analysis requested for unknown drug");
            error_response(StatusCode::NOT_FOUND, e.to_string())
        }
    }
}
