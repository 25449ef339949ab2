use crate::domain::AudioFileName;

#[async_trait::async_trait]
pub trait AudioStore: Send + Sync {
    async fn store(&self, name: &AudioFileName, data: Vec<u8>) -> Result<u64, AudioStoreError>;

    async fn fetch(&self, name: &AudioFileName) -> Result<Vec<u8>, AudioStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioStoreError {
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("audio file not found: {0}")]
    NotFound(String),
    #[error("read failed: {0}")]
    ReadFailed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
