use std::fmt;

/// Language code that is always served by the hosted API family.
pub const UNIVERSAL_LANGUAGE: &str = "en";

/// Regional code substituted for tags the router does not recognise.
pub const DEFAULT_REGIONAL_LANGUAGE: &str = "hi";

/// Regional languages served by the in-process model.
pub const REGIONAL_LANGUAGES: [&str; 22] = [
    "hi", "ta", "te", "kn", "ml", "mr", "gu", "bn", "pa", "as", "or", "ur", "ne", "sa", "brx",
    "doi", "kok", "ks", "mai", "mni", "sat", "sd",
];

/// Regional languages the in-process model transcribes under their own code.
pub const MODEL_LANGUAGES: [&str; 14] = [
    "hi", "ta", "te", "kn", "ml", "mr", "gu", "bn", "pa", "as", "or", "ur", "ne", "sa",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageClass {
    Universal,
    Regional,
    Unrecognized,
}

impl LanguageClass {
    /// Classifies an already-normalized (trimmed, lowercase) tag.
    pub fn of(tag: &str) -> Self {
        if tag == UNIVERSAL_LANGUAGE {
            Self::Universal
        } else if is_regional(tag) {
            Self::Regional
        } else {
            Self::Unrecognized
        }
    }
}

pub fn normalize_tag(tag: &str) -> String {
    tag.trim().to_lowercase()
}

pub fn is_regional(tag: &str) -> bool {
    REGIONAL_LANGUAGES.contains(&tag)
}

/// Language a non-universal tag actually runs with; codes outside
/// [`MODEL_LANGUAGES`] run as [`DEFAULT_REGIONAL_LANGUAGE`].
pub fn model_language(tag: &str) -> &str {
    if MODEL_LANGUAGES.contains(&tag) {
        tag
    } else {
        DEFAULT_REGIONAL_LANGUAGE
    }
}

/// Every language code accepted by transcription, universal code first.
pub fn supported_languages() -> Vec<&'static str> {
    std::iter::once(UNIVERSAL_LANGUAGE)
        .chain(REGIONAL_LANGUAGES.iter().copied())
        .collect()
}

/// Decoding strategy hint for models that support more than one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodingMode {
    #[default]
    Ctc,
    Rnnt,
}

impl DecodingMode {
    /// Unknown or missing hints fall back to [`DecodingMode::Ctc`].
    pub fn coerce(hint: Option<&str>) -> Self {
        match hint.map(|h| h.trim().to_lowercase()).as_deref() {
            Some("rnnt") => Self::Rnnt,
            _ => Self::Ctc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ctc => "ctc",
            Self::Rnnt => "rnnt",
        }
    }
}

impl fmt::Display for DecodingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Wav,
    Mp3,
    M4a,
    Ogg,
    Flac,
}

impl AudioFormat {
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, extension) = filename.rsplit_once('.')?;
        match extension.to_lowercase().as_str() {
            "wav" => Some(Self::Wav),
            "mp3" => Some(Self::Mp3),
            "m4a" => Some(Self::M4a),
            "ogg" => Some(Self::Ogg),
            "flac" => Some(Self::Flac),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Mp3 => "mp3",
            Self::M4a => "m4a",
            Self::Ogg => "ogg",
            Self::Flac => "flac",
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Wav => "audio/wav",
            Self::Mp3 => "audio/mpeg",
            Self::M4a => "audio/mp4",
            Self::Ogg => "audio/ogg",
            Self::Flac => "audio/flac",
        }
    }
}
