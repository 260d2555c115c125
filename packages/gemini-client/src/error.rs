//! Error types for Gemini client.

use serde::Deserialize;
use thiserror::Error;

/// Result type for Gemini client operations.
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Gemini client errors.
#[derive(Debug, Error)]
pub enum GeminiError {
    /// Missing API key or an HTTP client that could not be built
    #[error("Configuration error: {0}")]
    Config(String),

    /// Connection failure or timeout before a response arrived
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response from `generateContent`
    #[error("Gemini API error ({status}): {message}")]
    Api {
        status: u16,
        /// `error.status` from the response body, e.g. `RESOURCE_EXHAUSTED`
        reason: Option<String>,
        message: String,
    },

    /// A 2xx response whose candidates carry no text (safety block, empty answer)
    #[error("No text candidate from Gemini (finish reason: {})", .finish_reason.as_deref().unwrap_or("unknown"))]
    EmptyCandidate { finish_reason: Option<String> },

    /// Response body or model output that did not deserialize
    #[error("Parse error: {0}")]
    Parse(String),
}

impl GeminiError {
    /// Build an [`GeminiError::Api`] from a status code and raw response body.
    ///
    /// Google's error envelope (`{"error": {"code", "message", "status"}}`) is
    /// unwrapped when present; any other body is kept as the message.
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => Self::Api {
                status,
                reason: envelope.error.status,
                message: envelope.error.message,
            },
            Err(_) => Self::Api {
                status,
                reason: None,
                message: body.trim().to_string(),
            },
        }
    }

    /// HTTP status of an API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for quota exhaustion (HTTP 429 / `RESOURCE_EXHAUSTED`).
    pub fn is_rate_limited(&self) -> bool {
        match self {
            Self::Api { status, reason, .. } => {
                *status == 429 || reason.as_deref() == Some("RESOURCE_EXHAUSTED")
            }
            _ => false,
        }
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    status: Option<String>,
}
