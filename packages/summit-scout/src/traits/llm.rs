//! LLM capability trait.
//!
//! The search pipeline needs exactly two things from a model provider:
//! - Free-text generation, optionally grounded in live web search
//! - Generation constrained to a JSON schema
//!
//! Any provider implementing both can be swapped in (see [`crate::ai`]).

use async_trait::async_trait;

use crate::error::Result;

/// Model provider used by the search and structuring steps.
///
/// Implementations own authentication, model selection and transport.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Generate free text from a prompt.
    ///
    /// With `grounding` enabled the provider may consult live web results.
    async fn generate_content(&self, prompt: &str, grounding: bool) -> Result<String>;

    /// Generate a JSON document constrained to `schema`.
    ///
    /// Returns the raw JSON text; callers deserialize and validate it.
    async fn generate_content_with_schema(
        &self,
        prompt: &str,
        schema: &serde_json::Value,
        grounding: bool,
    ) -> Result<String>;
}

