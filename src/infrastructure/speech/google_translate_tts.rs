use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{
    BackendError, BackendErrorKind, SpeechSynthesizer, SynthesizedAudio,
};
use crate::infrastructure::http::{ensure_success, map_send_error};

const BACKEND_NAME: &str = "google-translate-tts";
pub const DEFAULT_BASE_URL: &str = "https://translate.google.com";
pub const MAX_CHUNK_CHARS: usize = 100;

/// Keyless Google Translate speech endpoint; returns MP3 audio.
///
/// The endpoint rejects long inputs, so text is sent in pieces and the MP3 frames are
/// concatenated.
pub struct GoogleTranslateTts {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl GoogleTranslateTts {
    pub fn new(base_url: Option<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url
                .filter(|u| !u.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            timeout,
        }
    }
}

/// Splits on whitespace into pieces of at most `max_chars` characters.
///
/// A single word longer than the limit is cut at character boundaries.
pub fn split_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if word_len > max_chars {
            if !current.is_empty() {
                pieces.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let chars: Vec<char> = word.chars().collect();
            pieces.extend(chars.chunks(max_chars).map(|c| c.iter().collect::<String>()));
            continue;
        }

        let needed = if current.is_empty() { word_len } else { current_len + 1 + word_len };
        if needed > max_chars {
            pieces.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}

#[async_trait]
impl SpeechSynthesizer for GoogleTranslateTts {
    fn name(&self) -> &str {
        BACKEND_NAME
    }

    async fn synthesize(
        &self,
        text: &str,
        language: &str,
    ) -> Result<SynthesizedAudio, BackendError> {
        let pieces = split_text(text, MAX_CHUNK_CHARS);
        if pieces.is_empty() {
            return Err(BackendError::new(
                BACKEND_NAME,
                BackendErrorKind::InvalidResponse("nothing to synthesize".to_string()),
            ));
        }

        let url = format!("{}/translate_tts", self.base_url);
        let total = pieces.len().to_string();
        let mut data = Vec::new();

        for (idx, piece) in pieces.iter().enumerate() {
            let idx = idx.to_string();
            let textlen = piece.chars().count().to_string();
            let response = self
                .client
                .get(&url)
                .timeout(self.timeout)
                .query(&[
                    ("ie", "UTF-8"),
                    ("client", "tw-ob"),
                    ("tl", language),
                    ("q", piece.as_str()),
                    ("total", total.as_str()),
                    ("idx", idx.as_str()),
                    ("textlen", textlen.as_str()),
                ])
                .send()
                .await
                .map_err(|e| map_send_error(BACKEND_NAME, e))?;
            let response = ensure_success(BACKEND_NAME, response).await?;
            let bytes = response
                .bytes()
                .await
                .map_err(|e| map_send_error(BACKEND_NAME, e))?;
            data.extend_from_slice(&bytes);
        }

        if data.is_empty() {
            return Err(BackendError::new(
                BACKEND_NAME,
                BackendErrorKind::InvalidResponse("empty audio body".to_string()),
            ));
        }

        tracing::debug!(language, pieces = pieces.len(), bytes = data.len(), "Google Translate speech received");

        Ok(SynthesizedAudio {
            data,
            extension: "mp3",
        })
    }
}
