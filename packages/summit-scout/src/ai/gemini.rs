//! Gemini implementation of the LlmClient trait.
//!
//! # Example
//!
//! ```rust,ignore
//! use summit_scout::ai::GeminiAdapter;
//!
//! let llm = GeminiAdapter::new("AIza...").with_model("gemini-2.5-pro");
//! let text = llm.generate_content("Tech summits in Lisbon in 2025", true).await?;
//! ```

use std::time::Instant;

use async_trait::async_trait;
use gemini_client::{GeminiClient, GenerateRequest};
use tracing::debug;

use crate::config::GeminiSettings;
use crate::error::{Result, ScoutError};
use crate::traits::LlmClient;

/// Gemini-backed [`LlmClient`].
#[derive(Clone)]
pub struct GeminiAdapter {
    client: GeminiClient,
    model: String,
    temperature: Option<f32>,
    max_output_tokens: Option<u32>,
}

impl GeminiAdapter {
    /// Create an adapter with the default model and no generation overrides.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: GeminiClient::new(api_key),
            model: GeminiSettings::default().model,
            temperature: None,
            max_output_tokens: None,
        }
    }

    /// Build from settings. Fails when no API key is configured.
    pub fn from_settings(settings: &GeminiSettings) -> Result<Self> {
        let api_key = settings
            .api_key
            .as_deref()
            .ok_or_else(|| ScoutError::Config("GEMINI_API_KEY not set".into()))?;

        let mut client = GeminiClient::new(api_key).with_timeout(settings.timeout)?;
        if let Some(base_url) = &settings.base_url {
            client = client.with_base_url(base_url);
        }

        Ok(Self {
            client,
            model: settings.model.clone(),
            temperature: settings.temperature,
            max_output_tokens: settings.max_output_tokens,
        })
    }

    /// Set the model (default: gemini-2.5-flash).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Get the current model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn request(&self, prompt: &str, grounding: bool) -> GenerateRequest {
        let mut request = GenerateRequest::new(&self.model)
            .user(prompt)
            .grounding(grounding);
        if let Some(temperature) = self.temperature {
            request = request.temperature(temperature);
        }
        if let Some(max_output_tokens) = self.max_output_tokens {
            request = request.max_output_tokens(max_output_tokens);
        }
        request
    }

    async fn send(&self, request: GenerateRequest) -> Result<String> {
        let start = Instant::now();
        let grounded = request.is_grounded();

        let response = self.client.generate_content(request).await?;

        debug!(
            model = %self.model,
            grounded,
            output_len = response.text.len(),
            elapsed_ms = start.elapsed().as_millis(),
            "LLM call completed"
        );

        Ok(response.text)
    }
}

#[async_trait]
impl LlmClient for GeminiAdapter {
    async fn generate_content(&self, prompt: &str, grounding: bool) -> Result<String> {
        self.send(self.request(prompt, grounding)).await
    }

    async fn generate_content_with_schema(
        &self,
        prompt: &str,
        schema: &serde_json::Value,
        grounding: bool,
    ) -> Result<String> {
        let request = self.request(prompt, grounding).json_schema(schema.clone());
        self.send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn settings() -> GeminiSettings {
        GeminiSettings {
            api_key: Some("test-key".into()),
            model: "gemini-2.5-pro".into(),
            base_url: Some("http://127.0.0.1:9/".into()),
            max_output_tokens: Some(1024),
            temperature: Some(0.3),
            timeout: Duration::from_secs(5),
        }
    }

    #[test]
    fn test_from_settings() {
        let adapter = GeminiAdapter::from_settings(&settings()).unwrap();
        assert_eq!(adapter.model(), "gemini-2.5-pro");
        assert_eq!(adapter.client.base_url(), "http://127.0.0.1:9");
    }

    #[test]
    fn test_missing_key_is_config_error() {
        let mut settings = settings();
        settings.api_key = None;
        assert!(matches!(
            GeminiAdapter::from_settings(&settings),
            Err(ScoutError::Config(_))
        ));
    }

    #[test]
    fn test_request_carries_generation_settings() {
        let adapter = GeminiAdapter::from_settings(&settings()).unwrap();
        let request = adapter.request("Find summits", true);
        let body = serde_json::to_value(&request).unwrap();

        assert!(request.is_grounded());
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 1024);
        assert!(body["generationConfig"]["temperature"].is_number());
    }

    #[test]
    fn test_request_without_grounding_has_no_tools() {
        let adapter = GeminiAdapter::new("test-key");
        let request = adapter.request("Extract", false);
        let body = serde_json::to_value(&request).unwrap();

        assert!(!request.is_grounded());
        assert!(body.get("tools").is_none());
        assert!(body.get("generationConfig").is_none());
    }

    #[tokio::test]
    async fn test_network_failure_maps_to_llm_error() {
        let adapter = GeminiAdapter::from_settings(&settings()).unwrap();
        let result = adapter.generate_content("hi", false).await;
        assert!(matches!(result, Err(ScoutError::Llm(_))));
    }
}
