use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;

use crate::application::ports::{BackendError, BackendErrorKind, TranscriptionBackend};
use crate::domain::{
    BackendDescriptor, BackendKind, DecodingMode, LanguageSupport, TranscriptionResult,
};
use crate::infrastructure::http::{ensure_success, first_non_empty, map_send_error};

const TRANSCRIPT_FIELDS: [&str; 3] = ["text", "transcription", "transcript"];

/// Hosted Whisper-compatible transcription API reached with a multipart upload.
pub struct WhisperApiBackend {
    client: reqwest::Client,
    descriptor: BackendDescriptor,
    model: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl WhisperApiBackend {
    pub fn new(base_url: &str, model: &str, api_key: Option<String>, timeout: Duration) -> Self {
        let base_url = base_url.trim_end_matches('/');
        Self {
            client: reqwest::Client::new(),
            descriptor: BackendDescriptor::new(
                "whisper-api",
                BackendKind::HostedApi,
                base_url,
                LanguageSupport::All,
            ),
            model: model.to_string(),
            api_key: api_key.filter(|k| !k.is_empty()),
            timeout,
        }
    }
}

#[async_trait]
impl TranscriptionBackend for WhisperApiBackend {
    fn descriptor(&self) -> &BackendDescriptor {
        &self.descriptor
    }

    async fn transcribe(
        &self,
        audio_data: &[u8],
        language: &str,
        _decoding: DecodingMode,
    ) -> Result<TranscriptionResult, BackendError> {
        let name = self.name();
        let url = format!("{}/v1/audio/transcriptions", self.descriptor.endpoint);

        let file_part = multipart::Part::bytes(audio_data.to_vec())
            .file_name("audio.wav")
            .mime_str("audio/wav")
            .map_err(|e| {
                BackendError::new(name, BackendErrorKind::InvalidResponse(format!("mime: {}", e)))
            })?;

        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("language", language.to_string())
            .part("file", file_part);

        tracing::debug!(backend = %name, model = %self.model, language, "Sending audio to hosted Whisper API");

        let mut request = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .multipart(form);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| map_send_error(name, e))?;
        let response = ensure_success(name, response).await?;

        let body: serde_json::Value = response.json().await.map_err(|e| {
            BackendError::new(name, BackendErrorKind::InvalidResponse(format!("body: {}", e)))
        })?;

        let text = first_non_empty(&body, &TRANSCRIPT_FIELDS)
            .ok_or_else(|| BackendError::new(name, BackendErrorKind::EmptyText))?;

        tracing::info!(backend = %name, chars = text.chars().count(), "Hosted Whisper transcription completed");

        Ok(TranscriptionResult::new(text, language))
    }
}
