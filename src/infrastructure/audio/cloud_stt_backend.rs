use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::application::ports::{BackendError, BackendErrorKind, TranscriptionBackend};
use crate::domain::{
    BackendDescriptor, BackendKind, DecodingMode, LanguageSupport, TranscriptionResult,
};
use crate::infrastructure::http::{ensure_success, map_send_error};

#[derive(Serialize)]
struct CloudTranscribeRequest<'a> {
    audio: String,
    language: &'a str,
    model: &'a str,
    decoding: &'a str,
}

#[derive(Deserialize)]
struct CloudTranscribeResponse {
    #[serde(default)]
    transcript: Option<String>,
}

/// Cloud speech provider taking base64 audio inline in a JSON body.
pub struct CloudSttBackend {
    client: reqwest::Client,
    descriptor: BackendDescriptor,
    model: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl CloudSttBackend {
    pub fn new(
        base_url: &str,
        model: &str,
        api_key: Option<String>,
        languages: LanguageSupport,
        timeout: Duration,
    ) -> Self {
        let base_url = base_url.trim_end_matches('/');
        Self {
            client: reqwest::Client::new(),
            descriptor: BackendDescriptor::new(
                "cloud-stt",
                BackendKind::CloudBackend,
                base_url,
                languages,
            )
            .with_priority(1),
            model: model.to_string(),
            api_key: api_key.filter(|k| !k.is_empty()),
            timeout,
        }
    }
}

#[async_trait]
impl TranscriptionBackend for CloudSttBackend {
    fn descriptor(&self) -> &BackendDescriptor {
        &self.descriptor
    }

    async fn transcribe(
        &self,
        audio_data: &[u8],
        language: &str,
        decoding: DecodingMode,
    ) -> Result<TranscriptionResult, BackendError> {
        let name = self.name();
        let url = format!("{}/api/v1/speech/transcribe", self.descriptor.endpoint);

        let payload = CloudTranscribeRequest {
            audio: STANDARD.encode(audio_data),
            language,
            model: &self.model,
            decoding: decoding.as_str(),
        };

        tracing::debug!(backend = %name, language, bytes = audio_data.len(), "Sending audio to cloud STT");

        let mut request = self.client.post(&url).timeout(self.timeout).json(&payload);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| map_send_error(name, e))?;
        let response = ensure_success(name, response).await?;

        let body: CloudTranscribeResponse = response.json().await.map_err(|e| {
            BackendError::new(name, BackendErrorKind::InvalidResponse(format!("body: {}", e)))
        })?;

        let text = body
            .transcript
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| BackendError::new(name, BackendErrorKind::EmptyText))?;

        tracing::info!(backend = %name, chars = text.chars().count(), "Cloud STT transcription completed");

        Ok(TranscriptionResult::new(text, language))
    }
}
