mod audio_store;
mod backend_error;
mod embedder;
mod llm_client;
mod speech_model;
mod speech_synthesizer;
mod transcription_backend;
mod translation_backend;

pub use audio_store::{AudioStore, AudioStoreError};
pub use backend_error::{BackendError, BackendErrorKind};
pub use embedder::{Embedder, EmbedderError};
pub use llm_client::{LlmClient, LlmClientError};
pub use speech_model::{SpeechModel, SpeechModelError};
pub use speech_synthesizer::{SpeechSynthesizer, SynthesizedAudio};
pub use transcription_backend::TranscriptionBackend;
pub use translation_backend::TranslationBackend;
