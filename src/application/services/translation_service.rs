use std::sync::Arc;

use crate::application::ports::TranslationBackend;
use crate::domain::Translation;
use crate::domain::translation::{display_name, source_display_name};
use crate::infrastructure::observability::sanitize_prompt;

/// Translates through a single backend and degrades to identity on any failure.
///
/// A caller can tell that no translation happened only because the returned tags equal the
/// ones it passed in.
pub struct TranslationService {
    backend: Option<Arc<dyn TranslationBackend>>,
}

impl TranslationService {
    pub fn new(backend: Option<Arc<dyn TranslationBackend>>) -> Self {
        if backend.is_none() {
            tracing::warn!("No translation backend configured, translations pass through");
        }
        Self { backend }
    }

    pub fn is_configured(&self) -> bool {
        self.backend.is_some()
    }

    #[tracing::instrument(skip(self, text), fields(chars = text.chars().count()))]
    pub async fn translate(&self, text: &str, target: &str, source: &str) -> Translation {
        let Some(backend) = &self.backend else {
            return Translation::pass_through(text, source, target);
        };

        let source_name = source_display_name(source);
        let target_name = display_name(target);

        match backend.translate(text, &source_name, &target_name).await {
            Ok(translated) if !translated.trim().is_empty() => {
                tracing::debug!(
                    backend = %backend.name(),
                    source = %source_name,
                    target = %target_name,
                    translated = %sanitize_prompt(&translated),
                    "Translation succeeded"
                );
                Translation {
                    text: translated,
                    source_language: source_name,
                    target_language: target_name,
                }
            }
            Ok(_) => {
                tracing::warn!(backend = %backend.name(), "Translation came back empty, passing input through");
                Translation::pass_through(text, source, target)
            }
            Err(e) => {
                tracing::warn!(
                    backend = %backend.name(),
                    error = %e,
                    "Translation failed, passing input through"
                );
                Translation::pass_through(text, source, target)
            }
        }
    }
}
