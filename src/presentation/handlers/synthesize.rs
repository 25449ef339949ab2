use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::AudioStoreError;
use crate::domain::language::UNIVERSAL_LANGUAGE;
use crate::presentation::state::AppState;

use super::error_response::error_response;

#[derive(Debug, Deserialize)]
pub struct SynthesizeRequest {
    pub text: String,
    pub language: Option<String>,
}

#[derive(Serialize)]
pub struct SynthesizeResponse {
    pub audio_url: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn synthesize_handler(
    State(state): State<AppState>,
    Json(request): Json<SynthesizeRequest>,
) -> impl IntoResponse {
    if request.text.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Text must not be empty");
    }

    let language = request.language.as_deref().unwrap_or(UNIVERSAL_LANGUAGE);
    match state
        .synthesis_service
        .synthesize(&request.text, language)
        .await
    {
        Ok(name) => (
            StatusCode::OK,
            Json(SynthesizeResponse {
                audio_url: format!("/voice/audio/{}", name),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Speech synthesis failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error synthesizing speech: {}", e),
            )
        }
    }
}

pub async fn audio_file_handler(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> impl IntoResponse {
    match state.synthesis_service.fetch(&filename).await {
        Ok((name, data)) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, name.content_type())],
            data,
        )
            .into_response(),
        Err(AudioStoreError::NotFound(_)) => {
            error_response(StatusCode::NOT_FOUND, "Audio file not found")
        }
        Err(e) => {
            tracing::error!(error = %e, filename = %filename, "Failed to read audio file");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
