use serde::Serialize;

use super::language::{AudioFormat, DecodingMode};

#[derive(Debug, Clone)]
pub struct TranscriptionRequest {
    pub audio: Vec<u8>,
    pub filename: String,
    pub language: String,
    pub decoding: DecodingMode,
}

impl TranscriptionRequest {
    pub fn new(
        audio: Vec<u8>,
        filename: impl Into<String>,
        language: impl Into<String>,
        decoding_hint: Option<&str>,
    ) -> Self {
        Self {
            audio,
            filename: filename.into(),
            language: language.into(),
            decoding: DecodingMode::coerce(decoding_hint),
        }
    }

    pub fn format(&self) -> Option<AudioFormat> {
        AudioFormat::from_filename(&self.filename)
    }
}

/// Transcript plus the language the backend actually ran with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptionResult {
    pub text: String,
    pub language: String,
}

impl TranscriptionResult {
    pub fn new(text: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: language.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
