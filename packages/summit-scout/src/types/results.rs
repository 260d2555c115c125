//! Search step inputs, structured outputs, and the persisted pairing.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Company, Summit, TimeInterval};

/// Input for summit search.
#[derive(Debug, Clone)]
pub struct SummitsInput {
    /// City or country to search
    pub location: String,
    pub time_interval: TimeInterval,
}

impl SummitsInput {
    pub fn new(location: impl Into<String>, time_interval: TimeInterval) -> Self {
        Self {
            location: location.into(),
            time_interval,
        }
    }
}

/// Input for company search.
#[derive(Debug, Clone)]
pub struct CompaniesInput {
    pub summit: Summit,
}

/// Structured output of summit search.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SummitsOutput {
    /// List of matching summits, no duplicates.
    pub summits: Vec<Summit>,
}

/// Structured output of company search.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CompaniesOutput {
    /// List of participating companies, no duplicates.
    pub companies: Vec<Company>,
}

/// A summit paired with its participating companies.
///
/// This is the record written to result files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummitCompanies {
    pub summit: Summit,
    pub companies: Vec<Company>,
}
