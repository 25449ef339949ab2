use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::domain::translation::AUTO_DETECT;
use crate::presentation::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub target_language: String,
    pub source_language: Option<String>,
}

/// Always answers 200; a failed translation comes back as the original text.
#[tracing::instrument(skip(state, request), fields(target = %request.target_language))]
pub async fn translate_handler(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> impl IntoResponse {
    let source = request.source_language.as_deref().unwrap_or(AUTO_DETECT);
    let translation = state
        .translation_service
        .translate(&request.text, &request.target_language, source)
        .await;
    (StatusCode::OK, Json(translation))
}
