use crate::domain::DecodingMode;

/// A loaded speech recognition model running inside this process.
///
/// Takes `&mut self`: a model instance is not assumed to be safe for concurrent use, so
/// callers must serialize access.
pub trait SpeechModel: Send {
    fn name(&self) -> &str;

    /// `pcm` is 16 kHz mono audio in `[-1.0, 1.0]`.
    fn transcribe_pcm(
        &mut self,
        pcm: &[f32],
        language: &str,
        decoding: DecodingMode,
    ) -> Result<String, SpeechModelError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechModelError {
    #[error("model loading failed: {0}")]
    LoadFailed(String),
    #[error("inference failed: {0}")]
    InferenceFailed(String),
}
