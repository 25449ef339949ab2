use medmentor::application::ports::{BackendErrorKind, TranscriptionBackend};
use medmentor::domain::{BackendKind, DecodingMode};
use medmentor::infrastructure::audio::InProcessBackend;

use crate::helpers::mocks::FakeSpeechModel;
use crate::helpers::wav::{build_wav, silent_wav};

#[tokio::test]
async fn given_loaded_model_when_transcribing_then_model_sees_16khz_pcm_and_request_options() {
    let model = FakeSpeechModel::new("  ninga hegiddira  ");
    let seen = model.seen.clone();
    let backend = InProcessBackend::new(Some(Box::new(model)));

    let result = backend
        .transcribe(&silent_wav(16_000, 3_200), "kn", DecodingMode::Rnnt)
        .await
        .unwrap();

    assert_eq!(result.text, "ninga hegiddira");
    assert_eq!(result.language, "kn");
    assert_eq!(
        seen.lock().unwrap().clone(),
        vec![(3_200, "kn".to_string(), DecodingMode::Rnnt)]
    );
}

#[tokio::test]
async fn given_stereo_44khz_upload_when_transcribing_then_model_receives_mono_16khz() {
    let model = FakeSpeechModel::new("ok");
    let seen = model.seen.clone();
    let backend = InProcessBackend::new(Some(Box::new(model)));
    let samples: Vec<i16> = vec![0; 4_410 * 2];

    backend
        .transcribe(&build_wav(44_100, 2, &samples), "hi", DecodingMode::Ctc)
        .await
        .unwrap();

    let (len, _, _) = seen.lock().unwrap()[0].clone();
    assert!(len > 1_400 && len <= 1_600, "got {} samples", len);
}

#[tokio::test]
async fn given_model_returns_blank_text_when_transcribing_then_empty_text_error() {
    let backend = InProcessBackend::new(Some(Box::new(FakeSpeechModel::new("   "))));

    let error = backend
        .transcribe(&silent_wav(16_000, 160), "hi", DecodingMode::Ctc)
        .await
        .unwrap_err();

    assert!(error.is_empty_text());
}

#[tokio::test]
async fn given_undecodable_audio_when_transcribing_then_decoding_error() {
    let backend = InProcessBackend::new(Some(Box::new(FakeSpeechModel::new("ok"))));

    let error = backend
        .transcribe(b"not audio", "hi", DecodingMode::Ctc)
        .await
        .unwrap_err();

    assert!(matches!(error.kind, BackendErrorKind::Decoding(_)));
    assert!(!error.is_retryable());
}

#[tokio::test]
async fn given_unloaded_backend_when_transcribing_then_model_not_loaded() {
    let backend = InProcessBackend::unloaded();

    let error = backend
        .transcribe(&silent_wav(16_000, 160), "hi", DecodingMode::Ctc)
        .await
        .unwrap_err();

    assert!(matches!(error.kind, BackendErrorKind::ModelNotLoaded));
    assert!(!backend.is_ready());
    assert_eq!(backend.descriptor().endpoint, "unloaded");
}

#[test]
fn given_backend_when_describing_then_serves_only_regional_languages() {
    let backend = InProcessBackend::new(Some(Box::new(FakeSpeechModel::new("ok"))));
    let descriptor = backend.descriptor();

    assert_eq!(descriptor.kind, BackendKind::InProcessModel);
    assert_eq!(descriptor.endpoint, "fake-model");
    assert!(descriptor.languages.accepts("ta"));
    assert!(!descriptor.languages.accepts("en"));
    assert!(backend.is_ready());
}
