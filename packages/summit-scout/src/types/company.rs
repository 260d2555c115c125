//! Companies and their closed classification sets.
//!
//! Both enums are validated at parse time: a value outside the set fails
//! deserialization instead of being coerced.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::trim::trimmed;

/// Company size classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CompanyScale {
    // < 50 employees
    Startup,
    // 50-200
    Small,
    // 200-1000
    Medium,
    // 1000-10000
    Large,
    // 10000+
    Enterprise,
}

impl CompanyScale {
    pub const ALL: [CompanyScale; 5] = [
        Self::Startup,
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::Enterprise,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Startup => "startup",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Enterprise => "enterprise",
        }
    }
}

impl fmt::Display for CompanyScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Company industry classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CompanyField {
    // Technology sectors
    Software,
    ArtificialIntelligence,
    CloudComputing,
    Cybersecurity,
    DataAnalytics,
    Gaming,
    Hardware,
    Semiconductors,
    Telecommunications,

    // Business sectors
    Fintech,
    Healthcare,
    ECommerce,
    Automotive,
    Aerospace,
    Energy,
    Manufacturing,
    MediaEntertainment,
    Education,
    Consulting,

    Other,
}

impl CompanyField {
    pub const ALL: [CompanyField; 20] = [
        Self::Software,
        Self::ArtificialIntelligence,
        Self::CloudComputing,
        Self::Cybersecurity,
        Self::DataAnalytics,
        Self::Gaming,
        Self::Hardware,
        Self::Semiconductors,
        Self::Telecommunications,
        Self::Fintech,
        Self::Healthcare,
        Self::ECommerce,
        Self::Automotive,
        Self::Aerospace,
        Self::Energy,
        Self::Manufacturing,
        Self::MediaEntertainment,
        Self::Education,
        Self::Consulting,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Software => "software",
            Self::ArtificialIntelligence => "artificial_intelligence",
            Self::CloudComputing => "cloud_computing",
            Self::Cybersecurity => "cybersecurity",
            Self::DataAnalytics => "data_analytics",
            Self::Gaming => "gaming",
            Self::Hardware => "hardware",
            Self::Semiconductors => "semiconductors",
            Self::Telecommunications => "telecommunications",
            Self::Fintech => "fintech",
            Self::Healthcare => "healthcare",
            Self::ECommerce => "e_commerce",
            Self::Automotive => "automotive",
            Self::Aerospace => "aerospace",
            Self::Energy => "energy",
            Self::Manufacturing => "manufacturing",
            Self::MediaEntertainment => "media_entertainment",
            Self::Education => "education",
            Self::Consulting => "consulting",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for CompanyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A company participating in a summit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Company {
    /// Official company name, e.g. 'Google LLC'.
    #[serde(deserialize_with = "trimmed")]
    pub name: String,

    /// Headquarters country in English, e.g. 'United States'.
    #[serde(deserialize_with = "trimmed")]
    pub origin_country: String,

    /// Primary industry based on main product/service.
    pub field: CompanyField,

    /// Size: startup(<50), small(50-200), medium(200-1k), large(1k-10k), enterprise(10k+).
    pub scale: CompanyScale,
}

impl Company {
    pub fn new(
        name: impl Into<String>,
        origin_country: impl Into<String>,
        field: CompanyField,
        scale: CompanyScale,
    ) -> Self {
        Self {
            name: name.into(),
            origin_country: origin_country.into(),
            field,
            scale,
        }
    }
}
