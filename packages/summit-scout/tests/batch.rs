//! Integration tests for the batch runner.

use std::fs;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use summit_scout::{
    testing::MockLlm, BatchCompanyService, BatchConfig, CompaniesService, RetryPolicy,
    SummitCompanies, TimeInterval,
};
use tokio::time::Instant;

fn year_2025() -> TimeInterval {
    TimeInterval::new(
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
    )
}

fn summits_json(name: &str) -> String {
    format!(
        r#"{{"summits": [{{"name": "{}", "dates": "May 2025", "categories": ["AI"]}}]}}"#,
        name
    )
}

fn companies_json(name: &str) -> String {
    format!(
        r#"{{"companies": [{{"name": "{}", "origin_country": "Germany", "field": "software", "scale": "startup"}}]}}"#,
        name
    )
}

/// Berlin and Madrid succeed; every Paris call fails.
fn europe_mock() -> MockLlm {
    MockLlm::new()
        .always_failing("in Paris")
        .with_structured("in Berlin", summits_json("Tech Open Air"))
        .with_structured("in Madrid", summits_json("South Summit"))
        .with_structured("tech summit: Tech Open Air.", companies_json("Acme"))
        .with_structured("tech summit: South Summit.", companies_json("Globex"))
}

fn batch(mock: MockLlm) -> BatchCompanyService {
    BatchCompanyService::new(
        CompaniesService::new(Arc::new(mock), RetryPolicy::no_retry()),
        BatchConfig {
            sleep_success: Duration::from_secs(60),
            sleep_error: Duration::from_secs(180),
        },
    )
}

fn locations(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[tokio::test(start_paused = true)]
async fn test_failed_location_is_isolated() {
    let dir = tempfile::tempdir().unwrap();
    let service = batch(europe_mock());

    let report = service
        .run(&locations(&["Berlin", "Paris", "Madrid"]), &year_2025(), dir.path())
        .await;

    assert_eq!(report.total, 3);
    assert_eq!(report.success_count(), 2);
    assert_eq!(report.failed, vec!["Paris".to_string()]);

    assert_eq!(report.succeeded[0].location, "Berlin");
    assert_eq!(report.succeeded[1].location, "Madrid");

    let berlin = report.succeeded[0].path.file_name().unwrap().to_string_lossy().to_string();
    assert!(berlin.starts_with("summits-companies-berlin-"));

    let written: Vec<SummitCompanies> =
        serde_json::from_str(&fs::read_to_string(&report.succeeded[1].path).unwrap()).unwrap();
    assert_eq!(written[0].summit.name, "South Summit");
    assert_eq!(written[0].companies[0].name, "Globex");

    let files = fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(files, 2);
}

#[tokio::test(start_paused = true)]
async fn test_sleeps_between_locations_only() {
    let dir = tempfile::tempdir().unwrap();
    let service = batch(europe_mock());
    let start = Instant::now();

    service
        .run(&locations(&["Berlin", "Paris", "Madrid"]), &year_2025(), dir.path())
        .await;

    // 60s after Berlin, 180s after Paris, nothing after Madrid
    assert_eq!(start.elapsed(), Duration::from_secs(240));
}

#[tokio::test(start_paused = true)]
async fn test_no_sleep_after_last_failure() {
    let dir = tempfile::tempdir().unwrap();
    let service = batch(europe_mock());
    let start = Instant::now();

    let report = service
        .run(&locations(&["Berlin", "Paris"]), &year_2025(), dir.path())
        .await;

    assert_eq!(report.error_count(), 1);
    assert_eq!(start.elapsed(), Duration::from_secs(60));
}

#[tokio::test(start_paused = true)]
async fn test_write_failure_counts_as_location_failure() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, "file in the way").unwrap();

    let service = batch(europe_mock());
    let report = service
        .run(&locations(&["Berlin"]), &year_2025(), &blocker)
        .await;

    assert_eq!(report.success_count(), 0);
    assert_eq!(report.failed, vec!["Berlin".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn test_empty_batch() {
    let dir = tempfile::tempdir().unwrap();
    let report = batch(MockLlm::new()).run(&[], &year_2025(), dir.path()).await;

    assert_eq!(report.total, 0);
    assert!(report.succeeded.is_empty());
    assert!(report.failed.is_empty());
}
