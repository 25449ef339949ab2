use axum::Json;
use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::application::services::TranscriptionError;
use crate::domain::TranscriptionRequest;
use crate::domain::language::DEFAULT_REGIONAL_LANGUAGE;
use crate::presentation::state::AppState;

use super::error_response::error_response;

const FILE_FIELD: &str = "file";

#[derive(Debug, Deserialize)]
pub struct TranscribeParams {
    pub language: Option<String>,
    pub decoding: Option<String>,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler(
    State(state): State<AppState>,
    Query(params): Query<TranscribeParams>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut upload: Option<(String, Vec<u8>)> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Failed to read multipart: {}", e),
                );
            }
        };

        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        match field.bytes().await {
            Ok(data) => {
                upload = Some((filename, data.to_vec()));
                break;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read uploaded audio");
                return error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Failed to read file: {}", e),
                );
            }
        }
    }

    let Some((filename, audio)) = upload else {
        tracing::warn!("Transcription request with no file");
        return error_response(StatusCode::BAD_REQUEST, "No file uploaded");
    };

    let language = params
        .language
        .unwrap_or_else(|| DEFAULT_REGIONAL_LANGUAGE.to_string());
    let request = TranscriptionRequest::new(audio, filename, language, params.decoding.as_deref());

    tracing::debug!(
        filename = %request.filename,
        language = %request.language,
        decoding = %request.decoding,
        bytes = request.audio.len(),
        "Processing transcription upload"
    );

    match state.transcription_service.transcribe(&request).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => {
            let status = match &e {
                TranscriptionError::UnsupportedFormat(_) => StatusCode::BAD_REQUEST,
                TranscriptionError::Configuration(_) => StatusCode::SERVICE_UNAVAILABLE,
                TranscriptionError::EmptyResult { .. } => StatusCode::INTERNAL_SERVER_ERROR,
                TranscriptionError::Exhausted { .. } => StatusCode::BAD_GATEWAY,
            };
            tracing::warn!(error = %e, status = %status, "Transcription request failed");
            error_response(status, e.to_string())
        }
    }
}
