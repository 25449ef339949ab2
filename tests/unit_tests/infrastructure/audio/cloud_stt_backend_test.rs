use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Value, json};

use medmentor::application::ports::{BackendErrorKind, TranscriptionBackend};
use medmentor::domain::{DecodingMode, LanguageSupport};
use medmentor::infrastructure::audio::CloudSttBackend;

use crate::helpers::mock_server::start_mock_server;

const TRANSCRIBE_PATH: &str = "/api/v1/speech/transcribe";

type Payloads = Arc<Mutex<Vec<Value>>>;

fn responding(response: Value, payloads: Payloads) -> Router {
    Router::new()
        .route(
            TRANSCRIBE_PATH,
            post(
                move |State(payloads): State<Payloads>, Json(payload): Json<Value>| {
                    let response = response.clone();
                    async move {
                        payloads.lock().unwrap().push(payload);
                        Json(response)
                    }
                },
            ),
        )
        .with_state(payloads)
}

fn backend(base_url: &str) -> CloudSttBackend {
    CloudSttBackend::new(
        base_url,
        "saarika:v2",
        Some("key".to_string()),
        LanguageSupport::All,
        Duration::from_secs(5),
    )
}

#[tokio::test]
async fn given_transcript_when_transcribing_then_audio_is_sent_inline_as_base64() {
    let payloads = Payloads::default();
    let (url, shutdown) =
        start_mock_server(responding(json!({"transcript": "vanakkam"}), payloads.clone())).await;
    let audio = vec![1u8, 2, 3, 4, 5];

    let result = backend(&url)
        .transcribe(&audio, "ta", DecodingMode::Rnnt)
        .await
        .unwrap();

    assert_eq!(result.text, "vanakkam");
    assert_eq!(result.language, "ta");

    let payload = payloads.lock().unwrap()[0].clone();
    assert_eq!(payload["audio"], STANDARD.encode(&audio));
    assert_eq!(payload["language"], "ta");
    assert_eq!(payload["model"], "saarika:v2");
    assert_eq!(payload["decoding"], "rnnt");
    shutdown.send(()).ok();
}

#[tokio::test]
async fn given_blank_transcript_when_transcribing_then_empty_text_error() {
    let (url, shutdown) =
        start_mock_server(responding(json!({"transcript": "  "}), Payloads::default())).await;

    let error = backend(&url)
        .transcribe(&[0u8; 4], "hi", DecodingMode::Ctc)
        .await
        .unwrap_err();

    assert!(error.is_empty_text());
    shutdown.send(()).ok();
}

#[tokio::test]
async fn given_missing_transcript_field_when_transcribing_then_empty_text_error() {
    let (url, shutdown) =
        start_mock_server(responding(json!({"status": "ok"}), Payloads::default())).await;

    let error = backend(&url)
        .transcribe(&[0u8; 4], "hi", DecodingMode::Ctc)
        .await
        .unwrap_err();

    assert!(error.is_empty_text());
    shutdown.send(()).ok();
}

#[tokio::test]
async fn given_rate_limited_when_transcribing_then_retryable_status_error() {
    let app = Router::new().route(
        TRANSCRIBE_PATH,
        post(|| async { (StatusCode::TOO_MANY_REQUESTS, "slow down") }),
    );
    let (url, shutdown) = start_mock_server(app).await;

    let error = backend(&url)
        .transcribe(&[0u8; 4], "hi", DecodingMode::Ctc)
        .await
        .unwrap_err();

    assert!(matches!(error.kind, BackendErrorKind::Status { status: 429, .. }));
    assert!(error.is_retryable());
    shutdown.send(()).ok();
}

#[tokio::test]
async fn given_bad_request_when_transcribing_then_not_retryable() {
    let app = Router::new().route(
        TRANSCRIBE_PATH,
        post(|| async { (StatusCode::BAD_REQUEST, "bad audio") }),
    );
    let (url, shutdown) = start_mock_server(app).await;

    let error = backend(&url)
        .transcribe(&[0u8; 4], "hi", DecodingMode::Ctc)
        .await
        .unwrap_err();

    assert!(!error.is_retryable());
    shutdown.send(()).ok();
}
