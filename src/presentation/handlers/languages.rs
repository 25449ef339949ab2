use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::language::supported_languages;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct LanguagesResponse {
    pub languages: Vec<&'static str>,
    pub model_loaded: bool,
    pub backends: Vec<String>,
}

pub async fn languages_handler(State(state): State<AppState>) -> impl IntoResponse {
    let router = state.transcription_service.router();
    (
        StatusCode::OK,
        Json(LanguagesResponse {
            languages: supported_languages(),
            model_loaded: router.default_backend_ready(),
            backends: router
                .backends()
                .iter()
                .map(|b| b.name().to_string())
                .collect(),
        }),
    )
}
