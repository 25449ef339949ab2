use serde::Serialize;

/// Language tag meaning "let the backend detect the source language".
pub const AUTO_DETECT: &str = "auto";

const DISPLAY_NAMES: [(&str, &str); 10] = [
    ("hi", "Hindi"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("kn", "Kannada"),
    ("ml", "Malayalam"),
    ("mr", "Marathi"),
    ("gu", "Gujarati"),
    ("bn", "Bengali"),
    ("pa", "Punjabi"),
    ("en", "English"),
];

/// Maps a short code to its display name; unknown tags pass through unchanged.
pub fn display_name(tag: &str) -> String {
    let lowered = tag.to_lowercase();
    DISPLAY_NAMES
        .iter()
        .find(|(code, _)| *code == lowered)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| tag.to_string())
}

/// Source tags are normalized like targets, except the auto-detect marker.
pub fn source_display_name(tag: &str) -> String {
    if tag == AUTO_DETECT {
        tag.to_string()
    } else {
        display_name(tag)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    pub text: String,
    pub source_language: String,
    pub target_language: String,
}

impl Translation {
    /// The untranslated input paired with the tags exactly as requested.
    pub fn pass_through(text: &str, source: &str, target: &str) -> Self {
        Self {
            text: text.to_string(),
            source_language: source.to_string(),
            target_language: target.to_string(),
        }
    }
}
