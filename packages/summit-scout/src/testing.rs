//! Testing utilities including a scripted LLM client.
//!
//! Useful for testing the search pipeline without making real provider calls.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::error::{Result, ScoutError};
use crate::traits::LlmClient;

/// A scripted [`LlmClient`] for tests.
///
/// Responses are matched by needle: the first configured needle contained in
/// the prompt wins. Unmatched free-text calls echo the prompt back, so a
/// structured needle can match text carried through from the search prompt.
/// Unmatched structured calls fail.
#[derive(Default, Clone)]
pub struct MockLlm {
    /// Free-text responses by needle
    texts: Arc<RwLock<Vec<(String, String)>>>,

    /// JSON responses by needle
    structured: Arc<RwLock<Vec<(String, String)>>>,

    /// Injected failures by needle
    failures: Arc<RwLock<Vec<FailureRule>>>,

    /// Call tracking for assertions
    calls: Arc<RwLock<Vec<MockLlmCall>>>,
}

/// Record of a call made to the mock LLM.
#[derive(Debug, Clone, PartialEq)]
pub enum MockLlmCall {
    Generate { prompt: String, grounding: bool },
    Structured { prompt: String, grounding: bool },
}

impl MockLlmCall {
    pub fn prompt(&self) -> &str {
        match self {
            Self::Generate { prompt, .. } | Self::Structured { prompt, .. } => prompt.as_str(),
        }
    }
}

#[derive(Debug, Clone)]
struct FailureRule {
    needle: String,
    /// `None` fails forever
    remaining: Option<u32>,
}

impl MockLlm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer free-text calls whose prompt contains `needle`.
    pub fn with_text(self, needle: impl Into<String>, response: impl Into<String>) -> Self {
        self.texts
            .write()
            .unwrap()
            .push((needle.into(), response.into()));
        self
    }

    /// Answer schema-constrained calls whose prompt contains `needle`.
    pub fn with_structured(self, needle: impl Into<String>, json: impl Into<String>) -> Self {
        self.structured
            .write()
            .unwrap()
            .push((needle.into(), json.into()));
        self
    }

    /// Fail the next `times` calls of either kind whose prompt contains `needle`.
    pub fn failing(self, needle: impl Into<String>, times: u32) -> Self {
        self.failures.write().unwrap().push(FailureRule {
            needle: needle.into(),
            remaining: Some(times),
        });
        self
    }

    /// Fail every call whose prompt contains `needle`.
    pub fn always_failing(self, needle: impl Into<String>) -> Self {
        self.failures.write().unwrap().push(FailureRule {
            needle: needle.into(),
            remaining: None,
        });
        self
    }

    /// Get all calls made to this mock.
    pub fn calls(&self) -> Vec<MockLlmCall> {
        self.calls.read().unwrap().clone()
    }

    /// Clear call history.
    pub fn clear_calls(&self) {
        self.calls.write().unwrap().clear();
    }

    fn record(&self, call: MockLlmCall) {
        self.calls.write().unwrap().push(call);
    }

    fn injected_failure(&self, prompt: &str) -> Result<()> {
        let mut failures = self.failures.write().unwrap();
        for rule in failures.iter_mut() {
            if !prompt.contains(&rule.needle) {
                continue;
            }
            match &mut rule.remaining {
                None => {
                    return Err(ScoutError::llm(format!(
                        "mock failure for '{}'",
                        rule.needle
                    )))
                }
                Some(n) if *n == 0 => {}
                Some(n) => {
                    *n -= 1;
                    return Err(ScoutError::llm(format!(
                        "mock transient failure for '{}'",
                        rule.needle
                    )));
                }
            }
        }
        Ok(())
    }

    fn lookup(responses: &RwLock<Vec<(String, String)>>, prompt: &str) -> Option<String> {
        responses
            .read()
            .unwrap()
            .iter()
            .find(|(needle, _)| prompt.contains(needle.as_str()))
            .map(|(_, response)| response.clone())
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn generate_content(&self, prompt: &str, grounding: bool) -> Result<String> {
        self.record(MockLlmCall::Generate {
            prompt: prompt.to_string(),
            grounding,
        });
        self.injected_failure(prompt)?;

        Ok(Self::lookup(&self.texts, prompt)
            .unwrap_or_else(|| format!("Search results for: {}", prompt)))
    }

    async fn generate_content_with_schema(
        &self,
        prompt: &str,
        _schema: &serde_json::Value,
        grounding: bool,
    ) -> Result<String> {
        self.record(MockLlmCall::Structured {
            prompt: prompt.to_string(),
            grounding,
        });
        self.injected_failure(prompt)?;

        Self::lookup(&self.structured, prompt)
            .ok_or_else(|| ScoutError::llm("no structured response configured for prompt"))
    }
}
