use std::sync::Arc;

use crate::application::ports::{AudioStore, AudioStoreError, SpeechSynthesizer};
use crate::domain::AudioFileName;

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("no speech synthesizer configured")]
    NotConfigured,
    #[error("speech synthesis failed after {attempts} attempt(s) ({})", .backends.join(", "))]
    Exhausted {
        attempts: usize,
        backends: Vec<String>,
    },
    #[error("storage: {0}")]
    Storage(#[from] AudioStoreError),
}

/// Synthesizes speech through an ordered chain of synthesizers and stores the first result.
pub struct SynthesisService {
    synthesizers: Vec<Arc<dyn SpeechSynthesizer>>,
    store: Arc<dyn AudioStore>,
}

impl SynthesisService {
    pub fn new(synthesizers: Vec<Arc<dyn SpeechSynthesizer>>, store: Arc<dyn AudioStore>) -> Self {
        Self {
            synthesizers,
            store,
        }
    }

    #[tracing::instrument(skip(self, text), fields(chars = text.chars().count()))]
    pub async fn synthesize(
        &self,
        text: &str,
        language: &str,
    ) -> Result<AudioFileName, SynthesisError> {
        if self.synthesizers.is_empty() {
            return Err(SynthesisError::NotConfigured);
        }

        let mut attempted = Vec::with_capacity(self.synthesizers.len());
        for synthesizer in &self.synthesizers {
            attempted.push(synthesizer.name().to_string());
            match synthesizer.synthesize(text, language).await {
                Ok(audio) => {
                    let timestamp = chrono::Utc::now()
                        .timestamp_nanos_opt()
                        .unwrap_or_default();
                    let name =
                        AudioFileName::generate(text, language, timestamp, audio.extension);
                    let bytes = self.store.store(&name, audio.data).await?;
                    tracing::info!(
                        synthesizer = %synthesizer.name(),
                        file = %name,
                        bytes,
                        "Speech synthesized"
                    );
                    return Ok(name);
                }
                Err(e) => {
                    tracing::warn!(
                        synthesizer = %synthesizer.name(),
                        error = %e,
                        "Speech synthesizer failed"
                    );
                }
            }
        }

        Err(SynthesisError::Exhausted {
            attempts: attempted.len(),
            backends: attempted,
        })
    }

    /// Pure lookup of a previously generated file.
    pub async fn fetch(&self, raw_name: &str) -> Result<(AudioFileName, Vec<u8>), AudioStoreError> {
        let name = AudioFileName::parse(raw_name)
            .ok_or_else(|| AudioStoreError::NotFound(raw_name.to_string()))?;
        let data = self.store.fetch(&name).await?;
        Ok((name, data))
    }
}
