use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::TranscriptionBackend;
use crate::domain::LanguageSupport;

use super::candle_whisper_model::CandleWhisperModel;
use super::cloud_stt_backend::CloudSttBackend;
use super::in_process_backend::InProcessBackend;
use super::whisper_api_backend::WhisperApiBackend;

/// Builds transcription backends from configuration values.
///
/// Network backends with an empty base URL are treated as unconfigured and yield `None`.
pub struct TranscriptionBackendFactory;

impl TranscriptionBackendFactory {
    pub fn hosted(
        base_url: &str,
        model: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Option<Arc<dyn TranscriptionBackend>> {
        if base_url.trim().is_empty() {
            tracing::info!("Hosted Whisper API not configured");
            return None;
        }
        Some(Arc::new(WhisperApiBackend::new(
            base_url, model, api_key, timeout,
        )))
    }

    pub fn cloud(
        base_url: &str,
        model: &str,
        api_key: Option<String>,
        languages: &[String],
        timeout: Duration,
    ) -> Option<Arc<dyn TranscriptionBackend>> {
        if base_url.trim().is_empty() {
            tracing::info!("Cloud STT backend not configured");
            return None;
        }
        let support = if languages.is_empty() {
            LanguageSupport::All
        } else {
            LanguageSupport::only(languages)
        };
        Some(Arc::new(CloudSttBackend::new(
            base_url, model, api_key, support, timeout,
        )))
    }

    /// Loads the in-process model; blocking, as it may download weights.
    ///
    /// A load failure still yields a backend, one that reports `ModelNotLoaded` on every call.
    pub fn in_process(enabled: bool, model_id: &str, use_gpu: bool) -> Arc<dyn TranscriptionBackend> {
        if !enabled {
            tracing::info!("In-process speech model disabled");
            return Arc::new(InProcessBackend::unloaded());
        }
        match CandleWhisperModel::load(model_id, use_gpu) {
            Ok(model) => Arc::new(InProcessBackend::new(Some(Box::new(model)))),
            Err(e) => {
                tracing::error!(error = %e, model = model_id, "In-process speech model failed to load");
                Arc::new(InProcessBackend::unloaded())
            }
        }
    }
}
