use async_trait::async_trait;

use super::BackendError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedAudio {
    pub data: Vec<u8>,
    /// File extension matching the encoding of `data`, e.g. `wav`.
    pub extension: &'static str,
}

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    fn name(&self) -> &str;

    async fn synthesize(&self, text: &str, language: &str)
    -> Result<SynthesizedAudio, BackendError>;
}
