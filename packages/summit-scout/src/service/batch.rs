//! Sequential batch runs over many locations.

use std::path::{Path, PathBuf};

use tracing::{error, info};

use super::CompaniesService;
use crate::config::BatchConfig;
use crate::error::Result;
use crate::persist::{results_filename, save_results};
use crate::types::TimeInterval;

/// Major European tech hubs, used by `run-batch --europe`.
pub const EUROPE_TECH_HUBS: [&str; 15] = [
    "Berlin",
    "Amsterdam",
    "Paris",
    "Barcelona",
    "Dublin",
    "Lisbon",
    "Munich",
    "Madrid",
    "Stockholm",
    "Milan",
    "Vienna",
    "Copenhagen",
    "Helsinki",
    "Warsaw",
    "Prague",
];

/// A location whose results were written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationOutput {
    pub location: String,
    pub path: PathBuf,
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub total: usize,
    pub succeeded: Vec<LocationOutput>,
    pub failed: Vec<String>,
}

impl BatchReport {
    pub fn success_count(&self) -> usize {
        self.succeeded.len()
    }

    pub fn error_count(&self) -> usize {
        self.failed.len()
    }

    /// Log the run summary.
    pub fn log_summary(&self) {
        info!(
            total = self.total,
            successful = self.success_count(),
            failed = self.error_count(),
            "Batch summary"
        );
        for location in &self.failed {
            info!(location = %location, "Failed location");
        }
    }
}

/// Runs [`CompaniesService`] for each location, one at a time.
///
/// A failing location is logged and recorded; the batch continues. Fixed
/// pauses between locations guard against provider rate limits.
pub struct BatchCompanyService {
    service: CompaniesService,
    config: BatchConfig,
}

impl BatchCompanyService {
    pub fn new(service: CompaniesService, config: BatchConfig) -> Self {
        Self { service, config }
    }

    pub async fn run(
        &self,
        locations: &[String],
        time_interval: &TimeInterval,
        output_dir: &Path,
    ) -> BatchReport {
        let total = locations.len();
        info!(total, locations = ?locations, "Starting batch run");
        info!(period = %time_interval, "Time range");

        let mut report = BatchReport {
            total,
            ..Default::default()
        };

        for (i, location) in locations.iter().enumerate() {
            let position = i + 1;
            let is_last = position == total;
            info!(index = position, total, location = %location, "Processing location");

            let pause = match self.process(location, time_interval, output_dir).await {
                Ok(path) => {
                    info!(location = %location, path = %path.display(), "Successfully processed");
                    report.succeeded.push(LocationOutput {
                        location: location.clone(),
                        path,
                    });
                    self.config.sleep_success
                }
                Err(e) => {
                    error!(location = %location, error = %e, "Error processing location");
                    report.failed.push(location.clone());
                    self.config.sleep_error
                }
            };

            if !is_last {
                info!(seconds = pause.as_secs_f64(), "Sleeping before next location");
                tokio::time::sleep(pause).await;
            }
        }

        report.log_summary();
        report
    }

    async fn process(
        &self,
        location: &str,
        time_interval: &TimeInterval,
        output_dir: &Path,
    ) -> Result<PathBuf> {
        let results = self
            .service
            .get_companies_by_location(location, time_interval)
            .await?;

        let path = output_dir.join(results_filename(location));
        save_results(&path, &results)?;
        Ok(path)
    }
}

/// Merge explicit locations with the optional European preset.
///
/// Duplicates are dropped, keeping the first occurrence.
pub fn merge_locations(explicit: &[String], include_europe: bool) -> Vec<String> {
    let preset = EUROPE_TECH_HUBS
        .iter()
        .filter(|_| include_europe)
        .map(|s| s.to_string());

    let mut merged: Vec<String> = Vec::new();
    for location in explicit.iter().cloned().chain(preset) {
        if !merged.contains(&location) {
            merged.push(location);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_locations_dedups_in_order() {
        let explicit = vec!["Lisbon".to_string(), "Austin".to_string(), "Lisbon".to_string()];
        let merged = merge_locations(&explicit, true);

        assert_eq!(merged[0], "Lisbon");
        assert_eq!(merged[1], "Austin");
        assert_eq!(merged[2], "Berlin");
        assert_eq!(merged.len(), 2 + EUROPE_TECH_HUBS.len() - 1);
        assert_eq!(merged.iter().filter(|l| *l == "Lisbon").count(), 1);
    }

    #[test]
    fn test_merge_locations_without_preset() {
        assert!(merge_locations(&[], false).is_empty());
        assert_eq!(merge_locations(&[], true).len(), 15);
    }

    #[test]
    fn test_report_counts() {
        let report = BatchReport {
            total: 3,
            succeeded: vec![LocationOutput {
                location: "Berlin".into(),
                path: PathBuf::from("results/a.json"),
            }],
            failed: vec!["Paris".into(), "Madrid".into()],
        };
        assert_eq!(report.success_count(), 1);
        assert_eq!(report.error_count(), 2);
    }
}
