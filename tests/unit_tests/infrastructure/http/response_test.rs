use medmentor::infrastructure::http::first_non_empty;
use serde_json::json;

#[test]
fn given_several_candidate_fields_when_probing_then_first_non_blank_wins() {
    let body = json!({"text": "  ", "transcription": " hello ", "transcript": "ignored"});

    assert_eq!(
        first_non_empty(&body, &["text", "transcription", "transcript"]),
        Some("hello".to_string())
    );
}

#[test]
fn given_non_string_or_missing_fields_when_probing_then_none() {
    let body = json!({"text": 42, "transcription": null});

    assert_eq!(
        first_non_empty(&body, &["text", "transcription", "transcript"]),
        None
    );
}
