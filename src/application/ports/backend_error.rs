/// Failure of a single outbound backend call, tagged with the backend's name.
#[derive(Debug, thiserror::Error)]
#[error("{backend}: {kind}")]
pub struct BackendError {
    pub backend: String,
    pub kind: BackendErrorKind,
}

#[derive(Debug, thiserror::Error)]
pub enum BackendErrorKind {
    #[error("request timed out")]
    Timeout,
    #[error("network failure: {0}")]
    Network(String),
    #[error("status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("backend returned empty text")]
    EmptyText,
    #[error("audio decoding failed: {0}")]
    Decoding(String),
    #[error("model not loaded")]
    ModelNotLoaded,
    #[error("inference failed: {0}")]
    Inference(String),
}

impl BackendError {
    pub fn new(backend: impl Into<String>, kind: BackendErrorKind) -> Self {
        Self {
            backend: backend.into(),
            kind,
        }
    }

    /// Transient failures that could succeed on another attempt.
    pub fn is_retryable(&self) -> bool {
        match &self.kind {
            BackendErrorKind::Timeout | BackendErrorKind::Network(_) => true,
            BackendErrorKind::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    pub fn is_empty_text(&self) -> bool {
        matches!(self.kind, BackendErrorKind::EmptyText)
    }
}
