//! LLM provider implementations.
//!
//! This module provides the adapters behind the [`LlmClient`] trait and a
//! registry that picks one from configuration.

mod gemini;

pub use gemini::GeminiAdapter;

use std::sync::Arc;

use crate::config::{AdapterType, Config};
use crate::error::Result;
use crate::traits::LlmClient;

/// Build the configured LLM client.
pub fn create_client(config: &Config) -> Result<Arc<dyn LlmClient>> {
    match config.adapter_type {
        AdapterType::Gemini => Ok(Arc::new(GeminiAdapter::from_settings(&config.gemini)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScoutError;

    #[test]
    fn test_create_client_requires_api_key() {
        let config = Config::from_lookup(|_| None).unwrap();
        let result = create_client(&config);
        assert!(matches!(result, Err(ScoutError::Config(_))));
    }

    #[test]
    fn test_create_client_gemini() {
        let config = Config::from_lookup(|key| match key {
            "GEMINI_API_KEY" => Some("test-key".to_string()),
            _ => None,
        })
        .unwrap();
        tokio_test::assert_ok!(create_client(&config));
    }
}
