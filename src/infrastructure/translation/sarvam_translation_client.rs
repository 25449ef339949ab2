use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::application::ports::{BackendError, BackendErrorKind, TranslationBackend};
use crate::infrastructure::http::{ensure_success, first_non_empty, map_send_error};

const BACKEND_NAME: &str = "sarvam-translate";
const TRANSLATION_FIELDS: [&str; 3] = ["translated_text", "text", "translation"];

#[derive(Serialize)]
struct TranslateRequest<'a> {
    text: &'a str,
    source_language: &'a str,
    target_language: &'a str,
}

pub struct SarvamTranslationClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl SarvamTranslationClient {
    pub fn new(base_url: &str, api_key: Option<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.is_empty()),
            timeout,
        }
    }
}

#[async_trait]
impl TranslationBackend for SarvamTranslationClient {
    fn name(&self) -> &str {
        BACKEND_NAME
    }

    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, BackendError> {
        let url = format!("{}/api/v1/translation/translate", self.base_url);

        let mut request = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&TranslateRequest {
                text,
                source_language,
                target_language,
            });
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| map_send_error(BACKEND_NAME, e))?;
        let response = ensure_success(BACKEND_NAME, response).await?;

        let body: serde_json::Value = response.json().await.map_err(|e| {
            BackendError::new(
                BACKEND_NAME,
                BackendErrorKind::InvalidResponse(format!("body: {}", e)),
            )
        })?;

        first_non_empty(&body, &TRANSLATION_FIELDS)
            .ok_or_else(|| BackendError::new(BACKEND_NAME, BackendErrorKind::EmptyText))
    }
}
