use reqwest::Response;
use serde_json::Value;

use crate::application::ports::{BackendError, BackendErrorKind};

pub fn map_send_error(backend: &str, e: reqwest::Error) -> BackendError {
    let kind = if e.is_timeout() {
        BackendErrorKind::Timeout
    } else {
        BackendErrorKind::Network(e.to_string())
    };
    BackendError::new(backend, kind)
}

/// Passes 2xx responses through; anything else becomes a `Status` error carrying the body.
pub async fn ensure_success(backend: &str, response: Response) -> Result<Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown error".to_string());
    Err(BackendError::new(
        backend,
        BackendErrorKind::Status {
            status: status.as_u16(),
            body,
        },
    ))
}

/// First of `fields` holding a non-empty string, in the given order.
pub fn first_non_empty(body: &Value, fields: &[&str]) -> Option<String> {
    fields
        .iter()
        .filter_map(|field| body.get(*field).and_then(Value::as_str))
        .map(str::trim)
        .find(|text| !text.is_empty())
        .map(str::to_string)
}
