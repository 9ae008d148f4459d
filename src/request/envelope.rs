use serde::{Deserialize, Serialize};

/// `{ "ok": true }`
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct ContactResponse {
    pub ok: bool,
}

impl ContactResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

/// `{ "error": "..." }`
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: &str) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

/// Whatever the intake endpoint answered, as seen by the lead client.
/// Every part of it is optional.
#[derive(Deserialize, Debug, Default)]
pub struct ServerReply {
    #[serde(default)]
    pub ok: Option<bool>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ServerReply {
    /// Unreadable bodies are treated as empty ones.
    pub fn from_slice(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    /// The server-provided error text, if it sent a non-blank one.
    pub fn error_message(&self) -> Option<String> {
        self.error
            .as_deref()
            .map(str::trim)
            .filter(|error| !error.is_empty())
            .map(str::to_string)
    }

    pub fn marks_failure(&self) -> bool {
        self.ok == Some(false) || self.error_message().is_some()
    }
}
