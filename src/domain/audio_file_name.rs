use std::fmt;

use sha2::{Digest, Sha256};

use super::AudioFormat;

const HASH_HEX_LEN: usize = 64;

/// Content-addressed name of a synthesized audio file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioFileName(String);

impl AudioFileName {
    pub fn generate(text: &str, language: &str, timestamp_nanos: i64, extension: &str) -> Self {
        let digest = Sha256::digest(format!("{}_{}_{}", text, language, timestamp_nanos));
        Self(format!("{}.{}", hex::encode(digest), extension))
    }

    /// Accepts only names this type could have generated.
    pub fn parse(raw: &str) -> Option<Self> {
        let (stem, extension) = raw.split_once('.')?;
        let valid_stem = stem.len() == HASH_HEX_LEN
            && stem
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase());
        if !valid_stem || !matches!(extension, "wav" | "mp3") {
            return None;
        }
        Some(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn extension(&self) -> &str {
        self.0.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("")
    }

    pub fn content_type(&self) -> &'static str {
        AudioFormat::from_filename(&self.0)
            .map(|format| format.as_mime())
            .unwrap_or("audio/wav")
    }
}

impl fmt::Display for AudioFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
