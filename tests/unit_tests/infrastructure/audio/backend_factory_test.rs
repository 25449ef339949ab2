use std::time::Duration;

use medmentor::domain::BackendKind;
use medmentor::infrastructure::audio::TranscriptionBackendFactory;

const TIMEOUT: Duration = Duration::from_secs(5);

#[test]
fn given_empty_url_when_building_network_backends_then_none() {
    assert!(TranscriptionBackendFactory::hosted("", "whisper-large-v3", None, TIMEOUT).is_none());
    assert!(
        TranscriptionBackendFactory::cloud("  ", "saarika:v2", None, &[], TIMEOUT).is_none()
    );
}

#[test]
fn given_hosted_url_when_building_then_hosted_backend_accepts_all_languages() {
    let backend =
        TranscriptionBackendFactory::hosted("http://stt.local", "whisper-large-v3", None, TIMEOUT)
            .unwrap();

    assert_eq!(backend.descriptor().kind, BackendKind::HostedApi);
    assert_eq!(backend.name(), "whisper-api");
}

#[test]
fn given_cloud_language_list_when_building_then_backend_is_restricted_to_it() {
    let languages = vec!["hi".to_string(), "EN".to_string()];

    let backend = TranscriptionBackendFactory::cloud(
        "http://cloud.local",
        "saarika:v2",
        None,
        &languages,
        TIMEOUT,
    )
    .unwrap();

    let descriptor = backend.descriptor();
    assert_eq!(descriptor.kind, BackendKind::CloudBackend);
    assert!(descriptor.languages.accepts("hi"));
    assert!(descriptor.languages.accepts("en"));
    assert!(!descriptor.languages.accepts("ta"));
}

#[test]
fn given_empty_cloud_language_list_when_building_then_backend_accepts_everything() {
    let backend =
        TranscriptionBackendFactory::cloud("http://cloud.local", "saarika:v2", None, &[], TIMEOUT)
            .unwrap();

    assert!(backend.descriptor().languages.accepts("sat"));
}

#[test]
fn given_disabled_local_model_when_building_then_backend_exists_but_is_not_ready() {
    let backend = TranscriptionBackendFactory::in_process(false, "openai/whisper-small", false);

    assert_eq!(backend.descriptor().kind, BackendKind::InProcessModel);
    assert!(!backend.is_ready());
}
