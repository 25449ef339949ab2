use medmentor::domain::Translation;
use medmentor::domain::translation::{AUTO_DETECT, display_name, source_display_name};

#[test]
fn given_known_codes_when_mapping_then_returns_display_names() {
    assert_eq!(display_name("hi"), "Hindi");
    assert_eq!(display_name("TA"), "Tamil");
    assert_eq!(display_name("en"), "English");
}

#[test]
fn given_unknown_tag_when_mapping_then_passes_through_unchanged() {
    assert_eq!(display_name("Swahili"), "Swahili");
    assert_eq!(display_name("xx"), "xx");
}

#[test]
fn given_auto_source_when_mapping_then_kept_verbatim() {
    assert_eq!(source_display_name(AUTO_DETECT), "auto");
    assert_eq!(source_display_name("ml"), "Malayalam");
}

#[test]
fn given_pass_through_when_building_then_tags_are_as_requested() {
    let t = Translation::pass_through("hello", "en", "hi");

    assert_eq!(t.text, "hello");
    assert_eq!(t.source_language, "en");
    assert_eq!(t.target_language, "hi");
}
