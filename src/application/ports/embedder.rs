use async_trait::async_trait;

use crate::domain::Embedding;

#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Embedding, EmbedderError>;

    /// Vector length produced on success.
    fn dimensions(&self) -> usize;
}

#[derive(Debug, thiserror::Error)]
pub enum EmbedderError {
    #[error("embedding api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("embedding request timed out")]
    Timeout,
    #[error("invalid embedding response: {0}")]
    InvalidResponse(String),
}
