use thiserror::Error;

/// Unified error type for the entire portfolio-viewer-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
///
/// Formatting never fails: non-finite numbers are rendered as the neutral
/// zero string instead of surfacing here.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Data Source / Network ───────────────────────────────────────
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error ({source_name}, status {status}): {message}")]
    Api {
        source_name: String,
        status: u16,
        message: String,
    },

    // ── Serialization ───────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Preference Storage ──────────────────────────────────────────
    #[error("File I/O error: {0}")]
    FileIO(String),

    #[error("Invalid stored value for '{key}': {value}")]
    InvalidPreference { key: String, value: String },

    // ── Wiring ──────────────────────────────────────────────────────
    #[error("{0} accessed outside of its provider")]
    MissingProvider(&'static str),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // reqwest errors embed the full request URL; strip the query string.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
