use std::collections::HashSet;
use std::fmt;

/// Backend families the router can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    HostedApi,
    CloudBackend,
    InProcessModel,
}

impl BackendKind {
    pub fn protocol(&self) -> ProtocolKind {
        match self {
            Self::HostedApi => ProtocolKind::MultipartHttp,
            Self::CloudBackend => ProtocolKind::JsonRestBase64,
            Self::InProcessModel => ProtocolKind::InProcessModel,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HostedApi => "hosted-api",
            Self::CloudBackend => "cloud-backend",
            Self::InProcessModel => "in-process-model",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolKind {
    MultipartHttp,
    JsonRestBase64,
    InProcessModel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageSupport {
    All,
    Only(HashSet<String>),
}

impl LanguageSupport {
    pub fn only<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::Only(
            codes
                .into_iter()
                .map(|c| c.as_ref().trim().to_lowercase())
                .collect(),
        )
    }

    pub fn accepts(&self, language: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(codes) => codes.contains(language),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendDescriptor {
    pub name: String,
    pub kind: BackendKind,
    pub endpoint: String,
    pub languages: LanguageSupport,
    /// Lower ranks are tried first within the same backend kind.
    pub priority: u8,
}

impl BackendDescriptor {
    pub fn new(
        name: impl Into<String>,
        kind: BackendKind,
        endpoint: impl Into<String>,
        languages: LanguageSupport,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            endpoint: endpoint.into(),
            languages,
            priority: 0,
        }
    }

    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    pub fn protocol(&self) -> ProtocolKind {
        self.kind.protocol()
    }
}
