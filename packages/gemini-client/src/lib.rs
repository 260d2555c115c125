//! Pure Gemini REST API client
//!
//! A clean, minimal client for the Gemini `generateContent` API with no
//! domain-specific logic. Supports plain text generation, Google Search
//! grounding, and JSON-schema constrained (structured) output.
//!
//! # Example
//!
//! ```rust,ignore
//! use gemini_client::{GeminiClient, GenerateRequest};
//!
//! let client = GeminiClient::from_env()?;
//!
//! // Grounded text generation
//! let response = client
//!     .generate_content(
//!         GenerateRequest::new("gemini-2.5-flash")
//!             .user("Which tech conferences happen in Lisbon this year?")
//!             .google_search(),
//!     )
//!     .await?;
//! println!("{}", response.text);
//! ```
//!
//! # Type-Safe Structured Output
//!
//! ```rust,ignore
//! use schemars::JsonSchema;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, JsonSchema)]
//! struct Conference {
//!     name: String,
//!     city: String,
//! }
//!
//! #[derive(Deserialize, JsonSchema)]
//! struct Conferences {
//!     conferences: Vec<Conference>,
//! }
//!
//! // Schema generated automatically from type!
//! let found: Conferences = client
//!     .extract::<Conferences>("gemini-2.5-flash", "Web Summit, Lisbon. Slush, Helsinki.")
//!     .await?;
//! ```

pub mod error;
pub mod schema;
pub mod types;

pub use error::{GeminiError, Result};
pub use schema::StructuredOutput;
pub use types::*;

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Pure Gemini API client.
#[derive(Clone)]
pub struct GeminiClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a new Gemini client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create from environment variable `GEMINI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::Config("GEMINI_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for proxies, Vertex-compatible gateways, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set a per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GeminiError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(self)
    }

    /// Get the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Endpoint for a model's `generateContent` method.
    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    /// Generate content.
    ///
    /// Sends the request and returns the first candidate's text.
    pub async fn generate_content(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(self.endpoint(&request.model))
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Gemini request failed");
                GeminiError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Gemini API error");
            return Err(GeminiError::from_response(status.as_u16(), &error_text));
        }

        let raw: types::GenerateResponseRaw = response
            .json()
            .await
            .map_err(|e| GeminiError::Parse(e.to_string()))?;

        let finish_reason = raw
            .candidates
            .first()
            .and_then(|c| c.finish_reason.clone());
        let generated = raw
            .into_response()
            .ok_or(GeminiError::EmptyCandidate { finish_reason })?;

        debug!(
            model = %request.model,
            grounded = request.is_grounded(),
            output_len = generated.text.len(),
            finish_reason = ?generated.finish_reason,
            duration_ms = start.elapsed().as_millis(),
            "Gemini generate content"
        );

        Ok(generated)
    }

    /// Type-safe structured output extraction.
    ///
    /// Generates a JSON schema from the type `T` using `schemars`, sends it as
    /// `responseJsonSchema`, and deserializes the response.
    pub async fn extract<T: StructuredOutput>(
        &self,
        model: &str,
        prompt: impl Into<String>,
    ) -> Result<T> {
        let schema = T::gemini_schema();

        debug!(
            type_name = T::type_name(),
            schema = %serde_json::to_string_pretty(&schema).unwrap_or_default(),
            "Generated Gemini schema for extraction"
        );

        let request = GenerateRequest::new(model).user(prompt).json_schema(schema);
        let response = self.generate_content(request).await?;

        serde_json::from_str(strip_code_blocks(&response.text)).map_err(|e| {
            GeminiError::Parse(format!("Failed to deserialize response: {}", e))
        })
    }
}
