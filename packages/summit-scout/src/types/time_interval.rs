//! Date range used to scope summit searches.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Calendar date range with a human-readable rendering for prompts.
///
/// `start_date <= end_date` is expected but not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl TimeInterval {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Render as "From June 2025 to December 2025".
    pub fn describe(&self) -> String {
        format!(
            "From {} to {}",
            self.start_date.format("%B %Y"),
            self.end_date.format("%B %Y")
        )
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
