//! Core trait abstractions.

pub mod llm;

pub use llm::LlmClient;
