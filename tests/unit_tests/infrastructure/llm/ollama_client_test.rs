use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};

use medmentor::application::ports::{LlmClient, LlmClientError};
use medmentor::infrastructure::llm::OllamaClient;

use crate::helpers::mock_server::{start_mock_server, unreachable_base_url};

type Payloads = Arc<Mutex<Vec<Value>>>;

#[tokio::test]
async fn given_generation_response_when_generating_then_returns_text_and_sends_options() {
    let payloads = Payloads::default();
    let app = Router::new()
        .route(
            "/api/generate",
            post(
                |State(payloads): State<Payloads>, Json(payload): Json<Value>| async move {
                    payloads.lock().unwrap().push(payload);
                    Json(json!({"response": "RISK_LEVEL: High", "done": true}))
                },
            ),
        )
        .with_state(payloads.clone());
    let (url, shutdown) = start_mock_server(app).await;

    let client = OllamaClient::new(&format!("{}/", url), "gemma:4b", Duration::from_secs(5));
    let text = client.generate("assess this").await.unwrap();

    assert_eq!(text, "RISK_LEVEL: High");

    let payload = payloads.lock().unwrap()[0].clone();
    assert_eq!(payload["model"], "gemma:4b");
    assert_eq!(payload["prompt"], "assess this");
    assert_eq!(payload["stream"], false);
    assert!((payload["options"]["temperature"].as_f64().unwrap() - 0.3).abs() < 1e-6);
    assert!((payload["options"]["top_p"].as_f64().unwrap() - 0.9).abs() < 1e-6);
    shutdown.send(()).ok();
}

#[tokio::test]
async fn given_error_status_when_generating_then_api_request_failed() {
    let app = Router::new().route(
        "/api/generate",
        post(|| async { (StatusCode::NOT_FOUND, "model not found") }),
    );
    let (url, shutdown) = start_mock_server(app).await;

    let client = OllamaClient::new(&url, "missing", Duration::from_secs(5));
    let error = client.generate("hi").await.unwrap_err();

    match error {
        LlmClientError::ApiRequestFailed(msg) => assert!(msg.contains("model not found")),
        other => panic!("expected ApiRequestFailed, got {:?}", other),
    }
    shutdown.send(()).ok();
}

#[tokio::test]
async fn given_slow_server_when_generating_then_timeout() {
    let app = Router::new().route(
        "/api/generate",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Json(json!({"response": "late"}))
        }),
    );
    let (url, shutdown) = start_mock_server(app).await;

    let client = OllamaClient::new(&url, "gemma:4b", Duration::from_millis(100));
    let error = client.generate("hi").await.unwrap_err();

    assert!(matches!(error, LlmClientError::Timeout));
    shutdown.send(()).ok();
}

#[tokio::test]
async fn given_unreachable_server_when_generating_then_api_request_failed() {
    let client = OllamaClient::new(
        &unreachable_base_url().await,
        "gemma:4b",
        Duration::from_secs(5),
    );

    let error = client.generate("hi").await.unwrap_err();

    assert!(matches!(error, LlmClientError::ApiRequestFailed(_)));
}
