//! Offline post-processing of saved result files.
//!
//! Loads every `*.json` result file in a directory, flattens companies
//! across summits, filters by scale and origin country, deduplicates by
//! name, and writes one sorted list.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, info};

use crate::error::{Result, ScoutError};
use crate::persist::write_json;

const TOP_FIELDS: usize = 10;

/// One saved `{summit, companies}` entry, read leniently.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultEntry {
    #[serde(default)]
    pub summit: Option<SummitRef>,
    #[serde(default)]
    pub companies: Vec<CompanyRecord>,
}

/// The part of a saved summit the filter cares about.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummitRef {
    #[serde(default)]
    pub name: Option<String>,
}

/// A company as written to the filtered output.
///
/// Fields are plain strings so older or hand-edited files still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub origin_country: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub field: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub scale: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A company tagged with the summit it came from.
#[derive(Debug, Clone)]
struct SourcedCompany {
    company: CompanyRecord,
    summit: String,
}

/// Scale and country criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyFilter {
    allowed_scales: Vec<String>,
    excluded_countries: Vec<String>,
}

impl Default for CompanyFilter {
    fn default() -> Self {
        Self::new(["startup", "small", "medium"], ["united states"])
    }
}

impl CompanyFilter {
    /// Build a filter. Values are compared case-insensitively.
    pub fn new(
        allowed_scales: impl IntoIterator<Item = impl AsRef<str>>,
        excluded_countries: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Self {
        Self {
            allowed_scales: normalize_all(allowed_scales),
            excluded_countries: normalize_all(excluded_countries),
        }
    }

    pub fn allowed_scales(&self) -> &[String] {
        &self.allowed_scales
    }

    pub fn excluded_countries(&self) -> &[String] {
        &self.excluded_countries
    }

    /// Filter every result file in `results_dir` and write the list to `output`.
    pub fn run(&self, results_dir: &Path, output: &Path) -> Result<FilterReport> {
        info!(results_dir = %results_dir.display(), "Processing result files");

        let (files, entries) = load_results(results_dir)?;
        let (companies, mut report) = self.apply(entries);
        report.files = files;

        write_json(output, &companies)?;
        info!(output = %output.display(), unique = companies.len(), "Filtered companies saved");

        Ok(report)
    }

    /// Run the flatten, filter, dedupe and sort stages over loaded entries.
    pub fn apply(&self, entries: Vec<ResultEntry>) -> (Vec<CompanyRecord>, FilterReport) {
        let summit_entries = entries.len();

        let all = flatten(entries);
        let total_companies = all.len();

        let by_scale: Vec<SourcedCompany> = all
            .into_iter()
            .filter(|c| self.allowed_scales.contains(&normalize(&c.company.scale)))
            .collect();
        let after_scale = by_scale.len();

        let by_country: Vec<SourcedCompany> = by_scale
            .into_iter()
            .filter(|c| !self.excluded_countries.contains(&normalize(&c.company.origin_country)))
            .collect();
        let after_country = by_country.len();

        let mut unique = dedupe(by_country);
        unique.sort_by_key(|c| c.name.to_lowercase());

        let report = FilterReport {
            files: 0,
            summit_entries,
            total_companies,
            after_scale,
            after_country,
            unique: unique.len(),
            allowed_scales: self.allowed_scales.clone(),
            excluded_countries: self.excluded_countries.clone(),
            by_scale: self.count_by_scale(&unique),
            top_fields: top_fields(&unique),
        };

        (unique, report)
    }

    fn count_by_scale(&self, companies: &[CompanyRecord]) -> Vec<(String, usize)> {
        self.allowed_scales
            .iter()
            .map(|scale| {
                let count = companies
                    .iter()
                    .filter(|c| normalize(&c.scale) == *scale)
                    .count();
                (scale.clone(), count)
            })
            .collect()
    }
}

/// Load and concatenate every `*.json` file in `dir`, in path order.
///
/// Returns the number of files read alongside the entries. An unreadable or
/// malformed file is an error naming that file.
pub fn load_results(dir: &Path) -> Result<(usize, Vec<ResultEntry>)> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(|e| ScoutError::io(dir, e))?
        .map(|entry| entry.map(|e| e.path()).map_err(|e| ScoutError::io(dir, e)))
        .collect::<Result<_>>()?;
    paths.retain(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "json"));
    paths.sort();

    let mut entries = Vec::new();
    for path in &paths {
        let content = fs::read_to_string(path).map_err(|e| ScoutError::io(path, e))?;
        let file_entries: Vec<ResultEntry> =
            serde_json::from_str(&content).map_err(|e| ScoutError::json(path, e))?;
        debug!(path = %path.display(), entries = file_entries.len(), "Loaded result file");
        entries.extend(file_entries);
    }

    info!(files = paths.len(), entries = entries.len(), "Loaded summit entries");
    Ok((paths.len(), entries))
}

fn flatten(entries: Vec<ResultEntry>) -> Vec<SourcedCompany> {
    entries
        .into_iter()
        .flat_map(|entry| {
            let summit = entry
                .summit
                .and_then(|s| s.name)
                .unwrap_or_else(|| "Unknown".to_string());
            entry.companies.into_iter().map(move |company| SourcedCompany {
                company,
                summit: summit.clone(),
            })
        })
        .collect()
}

/// Keep the first occurrence of each trimmed, lower-cased name. Empty names are dropped.
fn dedupe(companies: Vec<SourcedCompany>) -> Vec<CompanyRecord> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for sourced in companies {
        let key = normalize(&sourced.company.name);
        if key.is_empty() {
            continue;
        }
        if seen.insert(key) {
            unique.push(sourced.company);
        } else {
            debug!(name = %sourced.company.name, summit = %sourced.summit, "Duplicate company dropped");
        }
    }
    unique
}

fn top_fields(companies: &[CompanyRecord]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for company in companies {
        let field = if company.field.is_empty() {
            "unknown".to_string()
        } else {
            company.field.clone()
        };
        *counts.entry(field).or_default() += 1;
    }

    // BTreeMap order breaks count ties by name
    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(TOP_FIELDS);
    ranked
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

fn normalize_all(values: impl IntoIterator<Item = impl AsRef<str>>) -> Vec<String> {
    values.into_iter().map(|v| normalize(v.as_ref())).collect()
}

/// Counts after each stage plus the final breakdowns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterReport {
    pub files: usize,
    pub summit_entries: usize,
    pub total_companies: usize,
    pub after_scale: usize,
    pub after_country: usize,
    pub unique: usize,
    pub allowed_scales: Vec<String>,
    pub excluded_countries: Vec<String>,
    pub by_scale: Vec<(String, usize)>,
    pub top_fields: Vec<(String, usize)>,
}

impl fmt::Display for FilterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Loaded {} summit entries from {} files", self.summit_entries, self.files)?;
        writeln!(f, "Found {} total company entries", self.total_companies)?;
        writeln!(
            f,
            "After filtering by scale ({}): {} companies",
            self.allowed_scales.join(", "),
            self.after_scale
        )?;
        writeln!(
            f,
            "After excluding countries ({}): {} companies",
            self.excluded_countries.join(", "),
            self.after_country
        )?;
        writeln!(f, "After removing duplicates: {} unique companies", self.unique)?;

        writeln!(f)?;
        writeln!(f, "Summary by scale:")?;
        for (scale, count) in &self.by_scale {
            writeln!(f, "  {}: {}", scale, count)?;
        }

        writeln!(f)?;
        writeln!(f, "Top {} fields:", TOP_FIELDS)?;
        for (field, count) in &self.top_fields {
            writeln!(f, "  {}: {}", field, count)?;
        }
        Ok(())
    }
}
