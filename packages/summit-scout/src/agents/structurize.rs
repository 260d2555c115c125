//! Structuring step: free text in, schema-validated record out.

use std::sync::Arc;

use gemini_client::{strip_code_blocks, StructuredOutput};
use tracing::debug;

use super::prompts::format_structurize_prompt;
use crate::error::{Result, ScoutError};
use crate::traits::LlmClient;

/// Converts unstructured text into a typed record via schema-constrained generation.
///
/// Calls are not retried here; search steps wrap structuring in their retry policy.
#[derive(Clone)]
pub struct Structurizer {
    client: Arc<dyn LlmClient>,
}

impl Structurizer {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self { client }
    }

    /// Extract `T` from `text`.
    ///
    /// Output that does not deserialize into `T` (missing fields, values
    /// outside a closed enum, unknown fields) is a [`ScoutError::Validation`].
    pub async fn structurize<T: StructuredOutput>(&self, text: &str) -> Result<T> {
        let schema_name = T::type_name();
        debug!(
            schema = %schema_name,
            text_len = text.len(),
            "Structurizing text"
        );

        let prompt = format_structurize_prompt(text);
        let raw = self
            .client
            .generate_content_with_schema(&prompt, &T::gemini_schema(), false)
            .await?;

        let parsed = serde_json::from_str(strip_code_blocks(&raw)).map_err(|source| {
            ScoutError::Validation {
                schema: schema_name.clone(),
                source,
            }
        })?;

        debug!(schema = %schema_name, "Structurization complete");
        Ok(parsed)
    }
}
