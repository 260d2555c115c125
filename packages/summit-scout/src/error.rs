//! Typed errors for summit-scout.
//!
//! Uses `thiserror` for library errors (not `anyhow`); the binary wraps
//! these with `anyhow::Context`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while searching, aggregating or filtering.
#[derive(Debug, Error)]
pub enum ScoutError {
    /// LLM provider call failed (network, rate limit, provider error)
    #[error("LLM error: {0}")]
    Llm(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Model output could not be parsed into the requested schema
    #[error("validation failed for {schema}: {source}")]
    Validation {
        schema: String,
        #[source]
        source: serde_json::Error,
    },

    /// Invalid or missing configuration
    #[error("config error: {0}")]
    Config(String),

    /// Filesystem operation failed
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON (de)serialization error outside of structuring
    #[error("JSON error in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ScoutError {
    /// Wrap any provider error as [`ScoutError::Llm`].
    pub fn llm(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Llm(err.into())
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}

impl From<gemini_client::GeminiError> for ScoutError {
    fn from(err: gemini_client::GeminiError) -> Self {
        Self::Llm(Box::new(err))
    }
}

/// Result type alias for summit-scout operations.
pub type Result<T> = std::result::Result<T, ScoutError>;
