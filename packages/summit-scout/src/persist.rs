//! Result file persistence.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::error::{Result, ScoutError};
use crate::types::SummitCompanies;

const RESULTS_PREFIX: &str = "summits-companies";

/// Write `value` as pretty-printed UTF-8 JSON, creating parent directories.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ScoutError::io(parent, e))?;
    }

    let json = serde_json::to_string_pretty(value).map_err(|e| ScoutError::json(path, e))?;
    fs::write(path, json).map_err(|e| ScoutError::io(path, e))
}

/// Persist one aggregation run.
pub fn save_results(path: &Path, results: &[SummitCompanies]) -> Result<()> {
    write_json(path, results)?;

    let companies: usize = results.iter().map(|r| r.companies.len()).sum();
    info!(
        path = %path.display(),
        summits = results.len(),
        companies,
        "Saved results"
    );
    Ok(())
}

/// `summits-companies-<uuid>.json`
pub fn default_results_filename() -> String {
    format!("{}-{}.json", RESULTS_PREFIX, Uuid::new_v4())
}

/// `summits-companies-<location-slug>-<uuid>.json`
pub fn results_filename(location: &str) -> String {
    format!("{}-{}-{}.json", RESULTS_PREFIX, slugify(location), Uuid::new_v4())
}

/// Lower-case, with every run of non-alphanumeric characters collapsed to `-`.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    for c in value.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }

    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        "location".to_string()
    } else {
        slug.to_string()
    }
}
