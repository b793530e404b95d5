use thiserror::Error;

/// Failure of a single backend request
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, TLS, timeout or body read failure
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Body was not the expected JSON envelope
    #[error("invalid response body (HTTP {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// Envelope decoded but `success` was false or missing
    #[error("backend reported failure (HTTP {status}){}", message_suffix(.message))]
    Unsuccessful {
        status: u16,
        message: Option<String>,
    },
}

impl ApiError {
    /// True for failures where the backend answered with a readable envelope
    pub fn is_unsuccessful(&self) -> bool {
        matches!(self, ApiError::Unsuccessful { .. })
    }
}

fn message_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}
