pub const DEFAULT_FILTER: &str = "info,medmentor=debug,tower_http=debug";

/// Configuration for tracing initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    /// Used when `RUST_LOG` is unset.
    pub default_filter: String,
}

impl TracingConfig {
    pub fn new(environment: impl Into<String>, level: &str, json_format: bool) -> Self {
        let level = level.trim();
        Self {
            environment: environment.into(),
            json_format,
            default_filter: if level.is_empty() {
                DEFAULT_FILTER.to_string()
            } else {
                level.to_string()
            },
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "local".to_string()),
            json_format: std::env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
            default_filter: DEFAULT_FILTER.to_string(),
        }
    }
}
