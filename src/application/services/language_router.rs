use std::sync::Arc;

use crate::application::ports::TranscriptionBackend;
use crate::domain::language;
use crate::domain::{BackendDescriptor, BackendKind, LanguageClass};

use super::transcription_service::TranscriptionError;

/// Backend families eligible for each language class, in fallback order.
static ROUTING_TABLE: [(LanguageClass, &[BackendKind]); 3] = [
    (
        LanguageClass::Universal,
        &[BackendKind::HostedApi, BackendKind::CloudBackend],
    ),
    (
        LanguageClass::Regional,
        &[BackendKind::InProcessModel, BackendKind::CloudBackend],
    ),
    (
        LanguageClass::Unrecognized,
        &[BackendKind::InProcessModel, BackendKind::CloudBackend],
    ),
];

fn eligible_kinds(class: LanguageClass) -> &'static [BackendKind] {
    ROUTING_TABLE
        .iter()
        .find(|(c, _)| *c == class)
        .map(|(_, kinds)| *kinds)
        .unwrap_or(&[])
}

/// Ordered backends for one request together with the language they will run with.
#[derive(Clone)]
pub struct LanguageRoute {
    pub requested: String,
    pub language: String,
    pub class: LanguageClass,
    pub backends: Vec<Arc<dyn TranscriptionBackend>>,
}

impl LanguageRoute {
    pub fn descriptors(&self) -> Vec<&BackendDescriptor> {
        self.backends.iter().map(|b| b.descriptor()).collect()
    }

    pub fn substituted(&self) -> bool {
        self.language != language::normalize_tag(&self.requested)
    }
}

impl std::fmt::Debug for LanguageRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageRoute")
            .field("requested", &self.requested)
            .field("language", &self.language)
            .field("class", &self.class)
            .field(
                "backends",
                &self.backends.iter().map(|b| b.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

pub struct LanguageRouter {
    /// The in-process model backend, always routable for non-universal languages.
    default_backend: Arc<dyn TranscriptionBackend>,
    backends: Vec<Arc<dyn TranscriptionBackend>>,
}

impl LanguageRouter {
    pub fn new(
        default_backend: Arc<dyn TranscriptionBackend>,
        additional: Vec<Arc<dyn TranscriptionBackend>>,
    ) -> Self {
        let mut backends = Vec::with_capacity(additional.len() + 1);
        backends.push(Arc::clone(&default_backend));
        backends.extend(additional);

        tracing::info!(
            backends = ?backends.iter().map(|b| b.name().to_string()).collect::<Vec<_>>(),
            default = %default_backend.name(),
            "Language router configured"
        );

        Self {
            default_backend,
            backends,
        }
    }

    pub fn route(&self, language_tag: &str) -> Result<LanguageRoute, TranscriptionError> {
        let normalized = language::normalize_tag(language_tag);
        let class = LanguageClass::of(&normalized);
        let resolved = match class {
            LanguageClass::Universal => normalized.clone(),
            _ => language::model_language(&normalized).to_string(),
        };

        let mut candidates: Vec<Arc<dyn TranscriptionBackend>> = Vec::new();
        for kind in eligible_kinds(class) {
            let mut of_kind: Vec<_> = self
                .backends
                .iter()
                .filter(|b| {
                    let d = b.descriptor();
                    d.kind == *kind && d.languages.accepts(&resolved)
                })
                .cloned()
                .collect();
            of_kind.sort_by_key(|b| b.descriptor().priority);
            candidates.extend(of_kind);
        }

        if candidates.is_empty() {
            if class == LanguageClass::Universal {
                return Err(TranscriptionError::Configuration(format!(
                    "no hosted transcription backend configured for '{}'",
                    resolved
                )));
            }
            candidates.push(Arc::clone(&self.default_backend));
        }

        if resolved != normalized {
            tracing::warn!(
                requested = %language_tag,
                substituted = %resolved,
                class = ?class,
                "Language not served under its own code, routing with default regional language"
            );
        }

        tracing::debug!(
            language = %resolved,
            class = ?class,
            candidates = ?candidates.iter().map(|b| b.name().to_string()).collect::<Vec<_>>(),
            "Transcription route selected"
        );

        Ok(LanguageRoute {
            requested: language_tag.to_string(),
            language: resolved,
            class,
            backends: candidates,
        })
    }

    pub fn default_backend_ready(&self) -> bool {
        self.default_backend.is_ready()
    }

    pub fn backends(&self) -> &[Arc<dyn TranscriptionBackend>] {
        &self.backends
    }
}
