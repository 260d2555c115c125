//! Summit search step.

use std::sync::Arc;

use tracing::{debug, info};

use super::prompts::format_summit_search_prompt;
use super::Structurizer;
use crate::error::Result;
use crate::retry::RetryPolicy;
use crate::traits::LlmClient;
use crate::types::{SummitsInput, SummitsOutput};

/// Finds technology summits for a location and time interval.
///
/// Grounded generation and structuring are each wrapped in the retry policy.
#[derive(Clone)]
pub struct SummitSearch {
    client: Arc<dyn LlmClient>,
    retry: RetryPolicy,
    structurizer: Structurizer,
}

impl SummitSearch {
    pub fn new(client: Arc<dyn LlmClient>, retry: RetryPolicy) -> Self {
        Self {
            structurizer: Structurizer::new(client.clone()),
            client,
            retry,
        }
    }

    pub async fn search(&self, input: &SummitsInput) -> Result<SummitsOutput> {
        let period = input.time_interval.describe();
        info!(location = %input.location, period = %period, "Searching summits");

        let prompt = format_summit_search_prompt(&input.location, &input.time_interval);

        let raw_text = self
            .retry
            .run(|| self.client.generate_content(&prompt, true))
            .await?;
        debug!(response_len = raw_text.len(), "Raw summit search response");

        let output: SummitsOutput = self
            .retry
            .run(|| self.structurizer.structurize::<SummitsOutput>(&raw_text))
            .await?;

        info!(
            location = %input.location,
            summits = output.summits.len(),
            "Found summits"
        );
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockLlm, MockLlmCall};
    use crate::types::TimeInterval;
    use chrono::NaiveDate;
    use std::time::Duration;

    fn input(location: &str) -> SummitsInput {
        SummitsInput::new(
            location,
            TimeInterval::new(
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            ),
        )
    }

    const BERLIN_SUMMITS: &str = r#"{"summits": [
        {"name": "Tech Open Air", "dates": "July 2-4, 2025", "categories": ["Startups"], "website": "https://toa.berlin", "venue": "Funkhaus"},
        {"name": "Berlin Buzzwords", "dates": "June 15-17, 2025", "categories": ["Search", "Data"]}
    ]}"#;

    #[tokio::test]
    async fn test_search_grounds_then_structures() {
        let mock = Arc::new(
            MockLlm::new()
                .with_text("in Berlin", "TOA and Berlin Buzzwords are held in Berlin.")
                .with_structured("TOA and Berlin Buzzwords", BERLIN_SUMMITS),
        );
        let search = SummitSearch::new(mock.clone(), RetryPolicy::no_retry());

        let output = search.search(&input("Berlin")).await.unwrap();

        assert_eq!(output.summits.len(), 2);
        assert_eq!(output.summits[0].name, "Tech Open Air");
        assert_eq!(output.summits[1].website, None);

        let calls = mock.calls();
        assert_eq!(calls.len(), 2);
        assert!(matches!(
            &calls[0],
            MockLlmCall::Generate { prompt, grounding: true }
                if prompt.contains("Berlin From January 2025 to December 2025")
        ));
        assert!(matches!(
            &calls[1],
            MockLlmCall::Structured { prompt, grounding: false }
                if prompt.contains("TOA and Berlin Buzzwords")
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_retries_transient_failure() {
        let mock = Arc::new(
            MockLlm::new()
                .failing("technology summits", 1)
                .with_structured("in Berlin", BERLIN_SUMMITS),
        );
        let retry = RetryPolicy::new(3).with_base_delay(Duration::from_secs(1));
        let search = SummitSearch::new(mock.clone(), retry);

        let output = search.search(&input("Berlin")).await.unwrap();

        assert_eq!(output.summits.len(), 2);
        let generates = mock
            .calls()
            .iter()
            .filter(|c| matches!(c, MockLlmCall::Generate { .. }))
            .count();
        assert_eq!(generates, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_exhausts_retries() {
        let mock = Arc::new(MockLlm::new().always_failing("in Atlantis"));
        let search = SummitSearch::new(mock.clone(), RetryPolicy::new(2));

        tokio_test::assert_err!(search.search(&input("Atlantis")).await);
        assert_eq!(mock.calls().len(), 2);
    }
}
