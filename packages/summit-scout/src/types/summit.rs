use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::trim::{trimmed, trimmed_opt, trimmed_vec};

/// A technology summit or conference found by search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Summit {
    /// Official summit name, e.g. 'Web Summit 2025'.
    #[serde(deserialize_with = "trimmed")]
    pub name: String,

    /// Date range as 'Month Day-Day, Year', e.g. 'June 15-17, 2025'.
    #[serde(deserialize_with = "trimmed")]
    pub dates: String,

    /// Focus areas, e.g. ['AI', 'Cloud', 'DevOps'].
    #[serde(deserialize_with = "trimmed_vec")]
    pub categories: Vec<String>,

    /// Full URL, e.g. 'https://websummit.com'.
    #[serde(default, deserialize_with = "trimmed_opt")]
    #[schemars(with = "Option<String>")]
    pub website: Option<String>,

    /// Location as 'Venue, City' or 'City, Country'.
    #[serde(default, deserialize_with = "trimmed_opt")]
    #[schemars(with = "Option<String>")]
    pub venue: Option<String>,
}

impl Summit {
    /// Create a summit with no categories, website or venue.
    pub fn new(name: impl Into<String>, dates: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dates: dates.into(),
            categories: Vec::new(),
            website: None,
            venue: None,
        }
    }

    pub fn with_categories(mut self, categories: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    pub fn with_venue(mut self, venue: impl Into<String>) -> Self {
        self.venue = Some(venue.into());
        self
    }
}
