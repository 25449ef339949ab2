use medmentor::infrastructure::observability::{DEFAULT_FILTER, TracingConfig};

#[test]
fn given_explicit_level_when_building_then_it_becomes_the_filter() {
    let config = TracingConfig::new("prod", "warn,medmentor=info", true);

    assert_eq!(config.environment, "prod");
    assert_eq!(config.default_filter, "warn,medmentor=info");
    assert!(config.json_format);
}

#[test]
fn given_blank_level_when_building_then_default_filter_is_used() {
    let config = TracingConfig::new("local", "  ", false);

    assert_eq!(config.default_filter, DEFAULT_FILTER);
    assert!(!config.json_format);
}
