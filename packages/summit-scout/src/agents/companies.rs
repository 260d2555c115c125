//! Company search step.

use std::sync::Arc;

use tracing::{debug, info};

use super::prompts::format_companies_prompt;
use super::Structurizer;
use crate::error::Result;
use crate::retry::RetryPolicy;
use crate::traits::LlmClient;
use crate::types::{CompaniesInput, CompaniesOutput};

/// Finds companies that participated in a summit.
#[derive(Clone)]
pub struct CompanySearch {
    client: Arc<dyn LlmClient>,
    retry: RetryPolicy,
    structurizer: Structurizer,
}

impl CompanySearch {
    pub fn new(client: Arc<dyn LlmClient>, retry: RetryPolicy) -> Self {
        Self {
            structurizer: Structurizer::new(client.clone()),
            client,
            retry,
        }
    }

    pub async fn search(&self, input: &CompaniesInput) -> Result<CompaniesOutput> {
        let summit = &input.summit;
        info!(summit = %summit.name, "Searching companies");

        let prompt = format_companies_prompt(summit);

        let raw_text = self
            .retry
            .run(|| self.client.generate_content(&prompt, true))
            .await?;
        debug!(response_len = raw_text.len(), "Raw companies search response");

        let output: CompaniesOutput = self
            .retry
            .run(|| self.structurizer.structurize::<CompaniesOutput>(&raw_text))
            .await?;

        info!(
            summit = %summit.name,
            companies = output.companies.len(),
            "Found companies"
        );
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockLlm, MockLlmCall};
    use crate::types::{CompanyField, CompanyScale, Summit};
    use std::time::Duration;

    fn slush() -> CompaniesInput {
        CompaniesInput {
            summit: Summit::new("Slush", "November 19-20, 2025").with_website("https://slush.org"),
        }
    }

    #[tokio::test]
    async fn test_search_structures_companies() {
        let mock = Arc::new(
            MockLlm::new().with_structured(
                "tech summit: Slush",
                r#"{"companies": [
                    {"name": "Supercell", "origin_country": "Finland", "field": "gaming", "scale": "large"},
                    {"name": "Wolt", "origin_country": "Finland", "field": "e_commerce", "scale": "medium"}
                ]}"#,
            ),
        );
        let search = CompanySearch::new(mock.clone(), RetryPolicy::no_retry());

        let output = search.search(&slush()).await.unwrap();

        assert_eq!(output.companies.len(), 2);
        assert_eq!(output.companies[0].field, CompanyField::Gaming);
        assert_eq!(output.companies[1].scale, CompanyScale::Medium);

        assert!(matches!(
            &mock.calls()[0],
            MockLlmCall::Generate { prompt, grounding: true }
                if prompt.contains("- Website: https://slush.org") && prompt.contains("- Venue: N/A")
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_output_is_retried_then_raised() {
        let mock = Arc::new(MockLlm::new().with_structured(
            "tech summit: Slush",
            r#"{"companies": [{"name": "Rovio", "origin_country": "Finland", "field": "games", "scale": "large"}]}"#,
        ));
        let retry = RetryPolicy::new(2).with_base_delay(Duration::from_millis(10));
        let search = CompanySearch::new(mock.clone(), retry);

        let err = search.search(&slush()).await.unwrap_err();

        assert!(matches!(err, crate::error::ScoutError::Validation { .. }));
        let structured = mock
            .calls()
            .iter()
            .filter(|c| matches!(c, MockLlmCall::Structured { .. }))
            .count();
        assert_eq!(structured, 2);
    }
}
