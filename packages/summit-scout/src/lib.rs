//! Tech Summit and Company Discovery
//!
//! Finds technology summits for a location and period, then the companies
//! that took part in each summit, using a web-grounded LLM followed by a
//! schema-constrained structuring pass.
//!
//! # Usage
//!
//! ```rust,ignore
//! use summit_scout::{create_client, CompaniesService, Config, TimeInterval};
//!
//! let config = Config::from_env()?;
//! let client = create_client(&config)?;
//! let service = CompaniesService::new(client, config.retry);
//!
//! let results = service.get_companies_by_location("Lisbon", &interval).await?;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - The `LlmClient` capability trait
//! - [`ai`] - Provider adapters (Gemini) and the adapter registry
//! - [`agents`] - Summit search, company search and structuring steps
//! - [`service`] - Per-location aggregation and the batch runner
//! - [`filter`] - Offline post-processing of saved result files
//! - [`retry`] - Exponential backoff retry policy
//! - [`testing`] - Scripted LLM client for tests

pub mod agents;
pub mod ai;
pub mod config;
pub mod error;
pub mod filter;
pub mod persist;
pub mod retry;
pub mod service;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use agents::{CompanySearch, Structurizer, SummitSearch};
pub use ai::{create_client, GeminiAdapter};
pub use config::{AdapterType, BatchConfig, Config, GeminiSettings};
pub use error::{Result, ScoutError};
pub use filter::{CompanyFilter, CompanyRecord, FilterReport};
pub use persist::save_results;
pub use retry::RetryPolicy;
pub use service::{BatchCompanyService, BatchReport, CompaniesService, EUROPE_TECH_HUBS};
pub use testing::{MockLlm, MockLlmCall};
pub use traits::LlmClient;
pub use types::{
    CompaniesInput, CompaniesOutput, Company, CompanyField, CompanyScale, Summit,
    SummitCompanies, SummitsInput, SummitsOutput, TimeInterval,
};
