mod sarvam_translation_client;

pub use sarvam_translation_client::SarvamTranslationClient;
