use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Multipart, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};

use medmentor::application::ports::{BackendErrorKind, TranscriptionBackend};
use medmentor::domain::{BackendKind, DecodingMode};
use medmentor::infrastructure::audio::WhisperApiBackend;

use crate::helpers::mock_server::{start_mock_server, unreachable_base_url};
use crate::helpers::wav::silent_wav;

const TRANSCRIPTIONS_PATH: &str = "/v1/audio/transcriptions";

#[derive(Clone, Default)]
struct Captured {
    fields: Arc<Mutex<Vec<(String, String)>>>,
    authorization: Arc<Mutex<Option<String>>>,
}

fn responding(body: Value, captured: Captured) -> Router {
    Router::new()
        .route(
            TRANSCRIPTIONS_PATH,
            post(
                move |State(captured): State<Captured>,
                      headers: HeaderMap,
                      mut multipart: Multipart| {
                    let body = body.clone();
                    async move {
                        *captured.authorization.lock().unwrap() = headers
                            .get("authorization")
                            .and_then(|v| v.to_str().ok())
                            .map(String::from);
                        while let Some(field) = multipart.next_field().await.unwrap() {
                            let name = field.name().unwrap_or_default().to_string();
                            let value = match field.file_name().map(String::from) {
                                Some(file_name) => file_name,
                                None => field.text().await.unwrap(),
                            };
                            captured.fields.lock().unwrap().push((name, value));
                        }
                        Json(body)
                    }
                },
            ),
        )
        .with_state(captured)
}

fn backend(base_url: &str, api_key: Option<&str>) -> WhisperApiBackend {
    WhisperApiBackend::new(
        base_url,
        "whisper-large-v3",
        api_key.map(String::from),
        Duration::from_secs(5),
    )
}

#[tokio::test]
async fn given_text_response_when_transcribing_then_uploads_multipart_and_returns_text() {
    let captured = Captured::default();
    let (url, shutdown) =
        start_mock_server(responding(json!({"text": " hello there "}), captured.clone())).await;

    let result = backend(&url, Some("secret"))
        .transcribe(&silent_wav(16_000, 160), "en", DecodingMode::Ctc)
        .await
        .unwrap();

    assert_eq!(result.text, "hello there");
    assert_eq!(result.language, "en");
    assert_eq!(
        captured.fields.lock().unwrap().clone(),
        vec![
            ("model".to_string(), "whisper-large-v3".to_string()),
            ("language".to_string(), "en".to_string()),
            ("file".to_string(), "audio.wav".to_string()),
        ]
    );
    assert_eq!(
        captured.authorization.lock().unwrap().clone(),
        Some("Bearer secret".to_string())
    );
    shutdown.send(()).ok();
}

#[tokio::test]
async fn given_alternate_field_name_when_transcribing_then_it_is_probed() {
    let (url, shutdown) = start_mock_server(responding(
        json!({"text": "", "transcription": "नमस्ते"}),
        Captured::default(),
    ))
    .await;

    let result = backend(&url, None)
        .transcribe(&silent_wav(16_000, 160), "en", DecodingMode::Ctc)
        .await
        .unwrap();

    assert_eq!(result.text, "नमस्ते");
    shutdown.send(()).ok();
}

#[tokio::test]
async fn given_empty_text_when_transcribing_then_empty_text_error() {
    let captured = Captured::default();
    let (url, shutdown) = start_mock_server(responding(json!({"text": ""}), captured.clone())).await;

    let error = backend(&url, None)
        .transcribe(&silent_wav(16_000, 160), "en", DecodingMode::Ctc)
        .await
        .unwrap_err();

    assert!(error.is_empty_text());
    assert_eq!(error.backend, "whisper-api");
    assert_eq!(captured.authorization.lock().unwrap().clone(), None);
    shutdown.send(()).ok();
}

#[tokio::test]
async fn given_server_error_when_transcribing_then_retryable_status_error() {
    let app = Router::new().route(
        TRANSCRIPTIONS_PATH,
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "model overloaded") }),
    );
    let (url, shutdown) = start_mock_server(app).await;

    let error = backend(&url, None)
        .transcribe(&silent_wav(16_000, 160), "en", DecodingMode::Ctc)
        .await
        .unwrap_err();

    match &error.kind {
        BackendErrorKind::Status { status, body } => {
            assert_eq!(*status, 500);
            assert_eq!(body, "model overloaded");
        }
        other => panic!("expected Status, got {:?}", other),
    }
    assert!(error.is_retryable());
    shutdown.send(()).ok();
}

#[tokio::test]
async fn given_unreachable_server_when_transcribing_then_network_error() {
    let url = unreachable_base_url().await;

    let error = backend(&url, None)
        .transcribe(&silent_wav(16_000, 160), "en", DecodingMode::Ctc)
        .await
        .unwrap_err();

    assert!(matches!(error.kind, BackendErrorKind::Network(_)));
    assert!(error.is_retryable());
}

#[test]
fn given_base_url_with_trailing_slash_when_constructing_then_descriptor_is_normalized() {
    let backend = backend("http://stt.local/", None);

    assert_eq!(backend.descriptor().endpoint, "http://stt.local");
    assert_eq!(backend.descriptor().kind, BackendKind::HostedApi);
    assert!(backend.descriptor().languages.accepts("en"));
}
