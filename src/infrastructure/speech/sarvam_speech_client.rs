use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::application::ports::{
    BackendError, BackendErrorKind, SpeechSynthesizer, SynthesizedAudio,
};
use crate::infrastructure::http::{ensure_success, map_send_error};

const BACKEND_NAME: &str = "sarvam-tts";
const SUPPORTED_LANGUAGES: [&str; 10] = ["hi", "ta", "te", "kn", "ml", "mr", "gu", "bn", "pa", "en"];
const FALLBACK_LANGUAGE: &str = "hi";

#[derive(Serialize)]
struct SpeechRequest<'a> {
    text: &'a str,
    language: &'a str,
    model: &'a str,
    voice: &'a str,
}

/// Sarvam text-to-speech; returns WAV audio.
pub struct SarvamSpeechClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
    voice: String,
    timeout: Duration,
}

impl SarvamSpeechClient {
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        model: &str,
        voice: &str,
        timeout: Duration,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.is_empty()),
            model: model.to_string(),
            voice: voice.to_string(),
            timeout,
        }
    }

    /// Languages the service does not know are synthesized as Hindi.
    pub fn voice_language(language: &str) -> &'static str {
        let language = language.trim().to_lowercase();
        SUPPORTED_LANGUAGES
            .iter()
            .find(|code| **code == language)
            .copied()
            .unwrap_or(FALLBACK_LANGUAGE)
    }
}

#[async_trait]
impl SpeechSynthesizer for SarvamSpeechClient {
    fn name(&self) -> &str {
        BACKEND_NAME
    }

    async fn synthesize(
        &self,
        text: &str,
        language: &str,
    ) -> Result<SynthesizedAudio, BackendError> {
        let url = format!("{}/v1/audio/speech", self.base_url);
        let voice_language = Self::voice_language(language);

        let mut request = self.client.post(&url).timeout(self.timeout).json(&SpeechRequest {
            text,
            language: voice_language,
            model: &self.model,
            voice: &self.voice,
        });
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| map_send_error(BACKEND_NAME, e))?;
        let response = ensure_success(BACKEND_NAME, response).await?;

        let data = response
            .bytes()
            .await
            .map_err(|e| map_send_error(BACKEND_NAME, e))?;
        if data.is_empty() {
            return Err(BackendError::new(
                BACKEND_NAME,
                BackendErrorKind::InvalidResponse("empty audio body".to_string()),
            ));
        }

        tracing::debug!(language = voice_language, bytes = data.len(), "Sarvam speech received");

        Ok(SynthesizedAudio {
            data: data.to_vec(),
            extension: "wav",
        })
    }
}
