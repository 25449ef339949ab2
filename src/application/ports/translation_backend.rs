use async_trait::async_trait;

use super::BackendError;

#[async_trait]
pub trait TranslationBackend: Send + Sync {
    fn name(&self) -> &str;

    /// Language arguments are display names (or `"auto"` for the source).
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, BackendError>;
}
