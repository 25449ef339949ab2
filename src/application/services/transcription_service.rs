use std::sync::Arc;

use crate::application::ports::{BackendError, BackendErrorKind};
use crate::domain::{TranscriptionRequest, TranscriptionResult};
use crate::infrastructure::observability::sanitize_prompt;

use super::language_router::LanguageRouter;

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("unsupported audio format '{0}', expected one of: wav, mp3, m4a, ogg, flac")]
    UnsupportedFormat(String),
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("transcription for language '{language}' produced no text after {attempts} attempt(s)")]
    EmptyResult { language: String, attempts: usize },
    #[error(
        "transcription for language '{language}' failed after {attempts} attempt(s) ({})",
        .backends.join(", ")
    )]
    Exhausted {
        language: String,
        attempts: usize,
        backends: Vec<String>,
    },
}

/// Drives a language route through its backends until one yields text.
pub struct TranscriptionService {
    router: Arc<LanguageRouter>,
}

impl TranscriptionService {
    pub fn new(router: Arc<LanguageRouter>) -> Self {
        Self { router }
    }

    pub fn router(&self) -> &LanguageRouter {
        &self.router
    }

    #[tracing::instrument(skip(self, request), fields(language = %request.language, bytes = request.audio.len()))]
    pub async fn transcribe(
        &self,
        request: &TranscriptionRequest,
    ) -> Result<TranscriptionResult, TranscriptionError> {
        if request.format().is_none() {
            return Err(TranscriptionError::UnsupportedFormat(
                request.filename.clone(),
            ));
        }

        let route = self.router.route(&request.language)?;
        let total = route.backends.len();
        let mut attempted: Vec<String> = Vec::with_capacity(total);
        let mut all_empty = true;

        for (index, backend) in route.backends.iter().enumerate() {
            let name = backend.name().to_string();
            tracing::debug!(
                backend = %name,
                protocol = ?backend.descriptor().protocol(),
                attempt = index + 1,
                of = total,
                decoding = %request.decoding,
                "Invoking transcription backend"
            );
            attempted.push(name.clone());

            let outcome = backend
                .transcribe(&request.audio, &route.language, request.decoding)
                .await
                .and_then(|result| {
                    if result.is_empty() {
                        Err(BackendError::new(&name, BackendErrorKind::EmptyText))
                    } else {
                        Ok(result)
                    }
                });

            match outcome {
                Ok(result) => {
                    tracing::info!(
                        backend = %name,
                        language = %route.language,
                        transcript = %sanitize_prompt(&result.text),
                        "Transcription succeeded"
                    );
                    return Ok(TranscriptionResult::new(
                        result.text.trim(),
                        route.language.clone(),
                    ));
                }
                Err(e) => {
                    all_empty &= e.is_empty_text();
                    let remaining = total - index - 1;
                    tracing::warn!(
                        backend = %name,
                        error = %e,
                        retryable = e.is_retryable(),
                        remaining,
                        "Transcription backend failed"
                    );
                }
            }
        }

        let attempts = attempted.len();
        if all_empty {
            Err(TranscriptionError::EmptyResult {
                language: request.language.clone(),
                attempts,
            })
        } else {
            Err(TranscriptionError::Exhausted {
                language: request.language.clone(),
                attempts,
                backends: attempted,
            })
        }
    }
}
