use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;

use medmentor::application::ports::{SpeechSynthesizer, TranslationBackend};
use medmentor::application::services::{
    LanguageRouter, RiskAnalysisService, SynthesisService, TranscriptionService,
    TranslationService,
};
use medmentor::infrastructure::audio::TranscriptionBackendFactory;
use medmentor::infrastructure::drugs::JsonDrugDataset;
use medmentor::infrastructure::llm::{OllamaClient, OllamaEmbedder};
use medmentor::infrastructure::observability::{TracingConfig, init_tracing};
use medmentor::infrastructure::speech::{GoogleTranslateTts, SarvamSpeechClient};
use medmentor::infrastructure::storage::LocalAudioStore;
use medmentor::infrastructure::translation::SarvamTranslationClient;
use medmentor::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (environment, settings) = Settings::load()?;

    init_tracing(
        &TracingConfig::new(
            environment.as_str(),
            &settings.logging.level,
            settings.logging.enable_json,
        ),
        settings.server.port,
    );

    let transcription = &settings.transcription;
    let local_model = transcription.local_model.clone();
    let in_process = tokio::task::spawn_blocking(move || {
        TranscriptionBackendFactory::in_process(
            local_model.enabled,
            &local_model.model_id,
            local_model.use_gpu,
        )
    })
    .await?;

    let additional = [
        TranscriptionBackendFactory::hosted(
            &transcription.whisper.base_url,
            &transcription.whisper.model,
            transcription.whisper.api_key.clone(),
            transcription.timeout(),
        ),
        TranscriptionBackendFactory::cloud(
            &transcription.cloud.base_url,
            &transcription.cloud.model,
            transcription.cloud.api_key.clone(),
            &transcription.cloud.languages,
            transcription.timeout(),
        ),
    ]
    .into_iter()
    .flatten()
    .collect();

    let router = Arc::new(LanguageRouter::new(in_process, additional));
    let transcription_service = Arc::new(TranscriptionService::new(router));

    let sarvam = &settings.sarvam;
    let translation_backend: Option<Arc<dyn TranslationBackend>> = sarvam.is_configured().then(|| {
        Arc::new(SarvamTranslationClient::new(
            &sarvam.base_url,
            sarvam.api_key.clone(),
            sarvam.timeout(),
        )) as Arc<dyn TranslationBackend>
    });
    let translation_service = Arc::new(TranslationService::new(translation_backend));

    let mut synthesizers: Vec<Arc<dyn SpeechSynthesizer>> = Vec::new();
    if sarvam.is_configured() {
        synthesizers.push(Arc::new(SarvamSpeechClient::new(
            &sarvam.base_url,
            sarvam.api_key.clone(),
            &sarvam.tts_model,
            &sarvam.voice,
            sarvam.timeout(),
        )));
    }
    if settings.synthesis.enable_fallback {
        synthesizers.push(Arc::new(GoogleTranslateTts::new(
            settings.synthesis.fallback_base_url.clone(),
            sarvam.timeout(),
        )));
    }
    let audio_store = Arc::new(LocalAudioStore::new(PathBuf::from(
        &settings.synthesis.output_dir,
    ))?);
    let synthesis_service = Arc::new(SynthesisService::new(synthesizers, audio_store));

    let drug_catalog = Arc::new(JsonDrugDataset::load_or_sample(
        settings.drugs.path().as_deref(),
    ));

    let ollama = &settings.ollama;
    let risk_analysis_service = Arc::new(RiskAnalysisService::new(
        Arc::new(OllamaClient::new(
            &ollama.base_url,
            &ollama.chat_model,
            ollama.generate_timeout(),
        )),
        Arc::new(OllamaEmbedder::new(
            &ollama.base_url,
            &ollama.embedding_model,
            ollama.embedding_dimension,
            ollama.embed_timeout(),
        )),
        Arc::clone(&drug_catalog),
    ));

    let state = AppState {
        transcription_service,
        translation_service,
        synthesis_service,
        risk_analysis_service,
        drug_catalog,
    };

    let router = create_router(state, settings.server.max_upload_bytes());

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
