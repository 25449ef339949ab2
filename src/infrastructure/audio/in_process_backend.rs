use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::ports::{
    BackendError, BackendErrorKind, SpeechModel, SpeechModelError, TranscriptionBackend,
};
use crate::domain::language::REGIONAL_LANGUAGES;
use crate::domain::{
    BackendDescriptor, BackendKind, DecodingMode, LanguageSupport, TranscriptionResult,
};

use super::audio_decoder::decode_audio_to_pcm;

/// Transcribes with a model loaded into this process.
///
/// The backend always exists so the router can rely on it; when the model failed to load,
/// every call fails with `ModelNotLoaded`.
pub struct InProcessBackend {
    descriptor: BackendDescriptor,
    model: Option<Mutex<Box<dyn SpeechModel>>>,
}

impl InProcessBackend {
    pub fn new(model: Option<Box<dyn SpeechModel>>) -> Self {
        let endpoint = model
            .as_ref()
            .map(|m| m.name().to_string())
            .unwrap_or_else(|| "unloaded".to_string());
        Self {
            descriptor: BackendDescriptor::new(
                "in-process-model",
                BackendKind::InProcessModel,
                endpoint,
                LanguageSupport::only(REGIONAL_LANGUAGES),
            ),
            model: model.map(Mutex::new),
        }
    }

    pub fn unloaded() -> Self {
        Self::new(None)
    }
}

#[async_trait]
impl TranscriptionBackend for InProcessBackend {
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
        let model = self
            .model
            .as_ref()
            .ok_or_else(|| BackendError::new(name, BackendErrorKind::ModelNotLoaded))?;

        let pcm = decode_audio_to_pcm(audio_data)
            .map_err(|e| BackendError::new(name, BackendErrorKind::Decoding(e.to_string())))?;

        let mut model = model.lock().await;
        tracing::debug!(
            backend = %name,
            model = %model.name(),
            language,
            decoding = %decoding,
            samples = pcm.len(),
            "Running in-process transcription"
        );

        let text = model
            .transcribe_pcm(&pcm, language, decoding)
            .map_err(|e| match e {
                SpeechModelError::LoadFailed(_) => {
                    BackendError::new(name, BackendErrorKind::ModelNotLoaded)
                }
                SpeechModelError::InferenceFailed(msg) => {
                    BackendError::new(name, BackendErrorKind::Inference(msg))
                }
            })?;

        let text = text.trim();
        if text.is_empty() {
            return Err(BackendError::new(name, BackendErrorKind::EmptyText));
        }

        Ok(TranscriptionResult::new(text, language))
    }

    fn is_ready(&self) -> bool {
        self.model.is_some()
    }
}
