//! Summit and company aggregation for one location.

use std::sync::Arc;

use tracing::info;

use crate::agents::{CompanySearch, SummitSearch};
use crate::error::Result;
use crate::retry::RetryPolicy;
use crate::traits::LlmClient;
use crate::types::{CompaniesInput, SummitCompanies, SummitsInput, TimeInterval};

/// Pairs every summit found for a location with its participating companies.
#[derive(Clone)]
pub struct CompaniesService {
    summits: SummitSearch,
    companies: CompanySearch,
}

impl CompaniesService {
    pub fn new(client: Arc<dyn LlmClient>, retry: RetryPolicy) -> Self {
        Self {
            summits: SummitSearch::new(client.clone(), retry),
            companies: CompanySearch::new(client, retry),
        }
    }

    /// Run summit search once, then company search once per summit, in order.
    ///
    /// Any failure aborts the whole location.
    pub async fn get_companies_by_location(
        &self,
        location: &str,
        time_interval: &TimeInterval,
    ) -> Result<Vec<SummitCompanies>> {
        info!(
            location,
            start = %time_interval.start_date(),
            end = %time_interval.end_date(),
            "Starting company search"
        );

        let summits = self
            .summits
            .search(&SummitsInput::new(location, *time_interval))
            .await?
            .summits;

        let total = summits.len();
        let mut results = Vec::with_capacity(total);
        for (i, summit) in summits.into_iter().enumerate() {
            info!(index = i + 1, total, summit = %summit.name, "Processing summit");

            let input = CompaniesInput { summit };
            let companies = self.companies.search(&input).await?.companies;
            results.push(SummitCompanies {
                summit: input.summit,
                companies,
            });
        }

        let total_companies: usize = results.iter().map(|r| r.companies.len()).sum();
        info!(
            location,
            summits = results.len(),
            companies = total_companies,
            "Search complete"
        );
        Ok(results)
    }
}
