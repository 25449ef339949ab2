use std::sync::Arc;

use medmentor::application::ports::{AudioStoreError, SpeechSynthesizer};
use medmentor::application::services::{SynthesisError, SynthesisService};

use crate::helpers::mocks::{InMemoryAudioStore, MockSynthesizer};

fn service(
    synthesizers: Vec<Arc<MockSynthesizer>>,
    store: Arc<InMemoryAudioStore>,
) -> SynthesisService {
    let synthesizers = synthesizers
        .into_iter()
        .map(|s| s as Arc<dyn SpeechSynthesizer>)
        .collect();
    SynthesisService::new(synthesizers, store)
}

#[tokio::test]
async fn given_primary_succeeds_when_synthesizing_then_file_is_stored_with_its_extension() {
    let primary = Arc::new(MockSynthesizer::succeeding("sarvam-tts", b"RIFF", "wav"));
    let fallback = Arc::new(MockSynthesizer::succeeding("google-tts", b"ID3", "mp3"));
    let store = Arc::new(InMemoryAudioStore::default());
    let service = service(
        vec![Arc::clone(&primary), Arc::clone(&fallback)],
        Arc::clone(&store),
    );

    let name = service.synthesize("take your pill", "hi").await.unwrap();

    assert_eq!(name.extension(), "wav");
    assert_eq!(store.names(), vec![name.as_str().to_string()]);
    assert_eq!(fallback.calls(), 0);
}

#[tokio::test]
async fn given_primary_fails_when_synthesizing_then_fallback_serves() {
    let primary = Arc::new(MockSynthesizer::failing("sarvam-tts"));
    let fallback = Arc::new(MockSynthesizer::succeeding("google-tts", b"ID3", "mp3"));
    let store = Arc::new(InMemoryAudioStore::default());
    let service = service(vec![Arc::clone(&primary), fallback], Arc::clone(&store));

    let name = service.synthesize("take your pill", "ta").await.unwrap();

    assert_eq!(name.extension(), "mp3");
    assert_eq!(primary.calls(), 1);

    let (fetched_name, data) = service.fetch(name.as_str()).await.unwrap();
    assert_eq!(fetched_name, name);
    assert_eq!(data, b"ID3".to_vec());
}

#[tokio::test]
async fn given_every_synthesizer_fails_when_synthesizing_then_exhausted() {
    let service = service(
        vec![
            Arc::new(MockSynthesizer::failing("sarvam-tts")),
            Arc::new(MockSynthesizer::failing("google-tts")),
        ],
        Arc::new(InMemoryAudioStore::default()),
    );

    let error = service.synthesize("hello", "en").await.unwrap_err();

    match error {
        SynthesisError::Exhausted { attempts, backends } => {
            assert_eq!(attempts, 2);
            assert_eq!(backends, vec!["sarvam-tts", "google-tts"]);
        }
        other => panic!("expected Exhausted, got {:?}", other),
    }
}

#[tokio::test]
async fn given_no_synthesizers_when_synthesizing_then_not_configured() {
    let service = service(vec![], Arc::new(InMemoryAudioStore::default()));

    let error = service.synthesize("hello", "en").await.unwrap_err();

    assert!(matches!(error, SynthesisError::NotConfigured));
}

#[tokio::test]
async fn given_malformed_name_when_fetching_then_not_found_without_touching_store() {
    let service = service(vec![], Arc::new(InMemoryAudioStore::default()));

    let error = service.fetch("../../etc/passwd").await.unwrap_err();

    assert!(matches!(error, AudioStoreError::NotFound(_)));
}

#[tokio::test]
async fn given_well_formed_but_unknown_name_when_fetching_then_not_found() {
    let service = service(vec![], Arc::new(InMemoryAudioStore::default()));

    let error = service
        .fetch(&format!("{}.wav", "a".repeat(64)))
        .await
        .unwrap_err();

    assert!(matches!(error, AudioStoreError::NotFound(_)));
}
