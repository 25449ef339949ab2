use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::domain::DrugRecord;
use crate::presentation::state::AppState;

use super::error_response::error_response;

#[derive(Debug, Default, Deserialize)]
pub struct DrugFilter {
    pub critical: Option<bool>,
    pub condition: Option<String>,
}

#[derive(Serialize)]
pub struct DrugListResponse<'a> {
    pub drugs: Vec<&'a DrugRecord>,
    pub count: usize,
}

pub async fn list_drugs_handler(
    State(state): State<AppState>,
    Query(filter): Query<DrugFilter>,
) -> impl IntoResponse {
    let catalog = &state.drug_catalog;
    let mut drugs: Vec<&DrugRecord> = match filter.condition.as_deref() {
        Some(condition) if !condition.trim().is_empty() => catalog.by_condition(condition),
        _ => catalog.records().iter().collect(),
    };
    if let Some(critical) = filter.critical {
        drugs.retain(|d| d.critical == critical);
    }

    let count = drugs.len();
    (StatusCode::OK, Json(DrugListResponse { drugs, count })).into_response()
}

pub async fn get_drug_handler(
    State(state): State<AppState>,
    Path(drug_name): Path<String>,
) -> impl IntoResponse {
    match state.drug_catalog.lookup(&drug_name) {
        Some(drug) => (StatusCode::OK, Json(drug)).into_response(),
        None => error_response(
            StatusCode::NOT_FOUND,
            format!("Drug '{}' not found", drug_name),
        ),
    }
}
