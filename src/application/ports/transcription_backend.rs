use async_trait::async_trait;

use super::BackendError;
use crate::domain::{BackendDescriptor, DecodingMode, TranscriptionResult};

#[async_trait]
pub trait TranscriptionBackend: Send + Sync {
    fn descriptor(&self) -> &BackendDescriptor;

    /// `language` is the resolved code; `decoding` may be ignored by backends without modes.
    async fn transcribe(
        &self,
        audio_data: &[u8],
        language: &str,
        decoding: DecodingMode,
    ) -> Result<TranscriptionResult, BackendError>;

    fn name(&self) -> &str {
        &self.descriptor().name
    }

    /// Whether the backend can currently serve requests at all.
    fn is_ready(&self) -> bool {
        true
    }
}
