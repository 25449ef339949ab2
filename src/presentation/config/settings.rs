use std::path::PathBuf;
use std::time::Duration;

use config::{Config, File};
use serde::Deserialize;

use super::Environment;

pub const ENVIRONMENT_VAR: &str = "APP_ENVIRONMENT";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("{0}")]
    Environment(String),
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub transcription: TranscriptionSettings,
    pub sarvam: SarvamSettings,
    pub synthesis: SynthesisSettings,
    pub ollama: OllamaSettings,
    pub drugs: DrugSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_mb: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub timeout_secs: u64,
    pub whisper: WhisperApiSettings,
    pub cloud: CloudSttSettings,
    pub local_model: LocalModelSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WhisperApiSettings {
    /// Empty disables the hosted API.
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CloudSttSettings {
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocalModelSettings {
    pub enabled: bool,
    pub model_id: String,
    pub use_gpu: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SarvamSettings {
    /// Shared by translation and speech; empty disables both.
    pub base_url: String,
    pub api_key: Option<String>,
    pub tts_model: String,
    pub voice: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SynthesisSettings {
    pub output_dir: String,
    pub enable_fallback: bool,
    pub fallback_base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OllamaSettings {
    pub base_url: String,
    pub chat_model: String,
    pub embedding_model: String,
    pub embedding_dimension: usize,
    pub generate_timeout_secs: u64,
    pub embed_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DrugSettings {
    /// Empty uses the bundled sample set.
    pub data_path: String,
}

impl Settings {
    /// Reads `.env`, then layers defaults, `appsettings.{env}` and `APP_*` variables.
    pub fn load() -> Result<(Environment, Self), SettingsError> {
        dotenvy::dotenv().ok();

        let environment: Environment = std::env::var(ENVIRONMENT_VAR)
            .unwrap_or_else(|_| "local".into())
            .try_into()
            .map_err(SettingsError::Environment)?;

        let settings = Self::build(
            Some(&format!("appsettings.{}", environment.as_str())),
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("transcription.cloud.languages")
                .try_parsing(true),
        )?;

        Ok((environment, settings))
    }

    /// Defaults overlaid by an optional settings file and an environment source.
    pub fn build(
        file: Option<&str>,
        env_source: config::Environment,
    ) -> Result<Self, SettingsError> {
        let mut builder = Self::with_defaults(Config::builder())?;
        if let Some(file) = file {
            builder = builder.add_source(File::with_name(file).required(false));
        }
        let settings = builder.add_source(env_source).build()?.try_deserialize()?;
        Ok(settings)
    }

    fn with_defaults(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        builder
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("server.max_upload_mb", 25)?
            .set_default("logging.level", "info,medmentor=debug,tower_http=debug")?
            .set_default("logging.enable_json", false)?
            .set_default("transcription.timeout_secs", 60)?
            .set_default("transcription.whisper.base_url", "")?
            .set_default("transcription.whisper.model", "whisper-large-v3")?
            .set_default("transcription.cloud.base_url", "")?
            .set_default("transcription.cloud.model", "saarika:v2")?
            .set_default(
                "transcription.cloud.languages",
                vec!["hi", "ta", "te", "kn", "ml", "mr", "gu", "bn", "pa", "en"],
            )?
            .set_default("transcription.local_model.enabled", true)?
            .set_default("transcription.local_model.model_id", "openai/whisper-small")?
            .set_default("transcription.local_model.use_gpu", false)?
            .set_default("sarvam.base_url", "")?
            .set_default("sarvam.tts_model", "sarvam-ai/OpenHathi-v0.1-Base")?
            .set_default("sarvam.voice", "default")?
            .set_default("sarvam.timeout_secs", 30)?
            .set_default("synthesis.output_dir", "output/audio")?
            .set_default("synthesis.enable_fallback", true)?
            .set_default("ollama.base_url", "http://localhost:11434")?
            .set_default("ollama.chat_model", "gemma:4b")?
            .set_default("ollama.embedding_model", "bge-large")?
            .set_default("ollama.embedding_dimension", 1024)?
            .set_default("ollama.generate_timeout_secs", 60)?
            .set_default("ollama.embed_timeout_secs", 30)?
            .set_default("drugs.data_path", "data/drug_data.json")
    }
}

impl ServerSettings {
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb * 1024 * 1024
    }
}

impl TranscriptionSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl SarvamSettings {
    pub fn is_configured(&self) -> bool {
        !self.base_url.trim().is_empty()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl OllamaSettings {
    pub fn generate_timeout(&self) -> Duration {
        Duration::from_secs(self.generate_timeout_secs)
    }

    pub fn embed_timeout(&self) -> Duration {
        Duration::from_secs(self.embed_timeout_secs)
    }
}

impl DrugSettings {
    pub fn path(&self) -> Option<PathBuf> {
        let path = self.data_path.trim();
        (!path.is_empty()).then(|| PathBuf::from(path))
    }
}
