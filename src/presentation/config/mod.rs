mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    CloudSttSettings, DrugSettings, ENVIRONMENT_VAR, LocalModelSettings, LoggingSettings,
    OllamaSettings, SarvamSettings, ServerSettings, Settings, SettingsError, SynthesisSettings,
    TranscriptionSettings, WhisperApiSettings,
};
