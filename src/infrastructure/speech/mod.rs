mod google_translate_tts;
mod sarvam_speech_client;

pub use google_translate_tts::{GoogleTranslateTts, MAX_CHUNK_CHARS, split_text};
pub use sarvam_speech_client::SarvamSpeechClient;
