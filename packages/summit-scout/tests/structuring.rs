//! Integration tests for schema-validated structuring.

use std::sync::Arc;

use gemini_client::StructuredOutput;
use summit_scout::{
    testing::MockLlm, CompaniesOutput, CompanyField, ScoutError, Structurizer, SummitsOutput,
};

#[tokio::test]
async fn test_unknown_field_value_fails_validation() {
    let mock = MockLlm::new().with_structured(
        "Globex",
        r#"{"companies": [{"name": "Globex", "origin_country": "Spain", "field": "biotech", "scale": "small"}]}"#,
    );
    let structurizer = Structurizer::new(Arc::new(mock));

    let err = structurizer
        .structurize::<CompaniesOutput>("Globex exhibited at South Summit")
        .await
        .unwrap_err();

    assert!(matches!(err, ScoutError::Validation { ref schema, .. } if schema == "CompaniesOutput"));
}

#[tokio::test]
async fn test_extra_property_fails_validation() {
    let mock = MockLlm::new().with_structured(
        "Slush",
        r#"{"summits": [{"name": "Slush", "dates": "November 2025", "categories": [], "attendees": 13000}]}"#,
    );
    let structurizer = Structurizer::new(Arc::new(mock));

    let result = structurizer.structurize::<SummitsOutput>("Slush in Helsinki").await;
    assert!(matches!(result, Err(ScoutError::Validation { .. })));
}

#[tokio::test]
async fn test_padded_strings_are_trimmed() {
    let mock = MockLlm::new()
        .with_structured(
            "Acme",
            r#"{"companies": [{"name": "  Acme  ", "origin_country": " Germany ", "field": "software", "scale": "startup"}]}"#,
        )
        .with_structured(
            "Pioneers",
            r#"{"summits": [{"name": " Pioneers ", "dates": "May 2025 ", "categories": ["  Startups"], "website": null, "venue": " Hofburg, Vienna "}]}"#,
        );
    let structurizer = Structurizer::new(Arc::new(mock));

    let companies: CompaniesOutput = structurizer.structurize("Acme at Pioneers").await.unwrap();
    assert_eq!(companies.companies[0].name, "Acme");
    assert_eq!(companies.companies[0].origin_country, "Germany");

    let summits: SummitsOutput = structurizer.structurize("Pioneers in Vienna").await.unwrap();
    let summit = &summits.summits[0];
    assert_eq!(summit.name, "Pioneers");
    assert_eq!(summit.dates, "May 2025");
    assert_eq!(summit.categories, vec!["Startups"]);
    assert_eq!(summit.venue.as_deref(), Some("Hofburg, Vienna"));
}

#[tokio::test]
async fn test_all_field_values_accepted() {
    let companies: Vec<String> = CompanyField::ALL
        .iter()
        .map(|field| {
            format!(
                r#"{{"name": "{0}", "origin_country": "Ireland", "field": "{0}", "scale": "small"}}"#,
                field.as_str()
            )
        })
        .collect();
    let json = format!(r#"{{"companies": [{}]}}"#, companies.join(","));
    let structurizer = Structurizer::new(Arc::new(MockLlm::new().with_structured("Dublin", json)));

    let output: CompaniesOutput = structurizer.structurize("Dublin Tech Summit").await.unwrap();

    let fields: Vec<CompanyField> = output.companies.iter().map(|c| c.field).collect();
    assert_eq!(fields, CompanyField::ALL.to_vec());
}

#[test]
fn test_output_schemas_are_self_contained() {
    for schema in [SummitsOutput::gemini_schema(), CompaniesOutput::gemini_schema()] {
        let text = serde_json::to_string(&schema).unwrap();
        assert!(!text.contains("$ref"));
        assert!(!text.contains("definitions"));
        assert_eq!(schema["additionalProperties"], serde_json::Value::Bool(false));
    }

    let companies = CompaniesOutput::gemini_schema();
    let scale = &companies["properties"]["companies"]["items"]["properties"]["scale"];
    let values: Vec<&str> = scale["enum"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    assert_eq!(values, vec!["startup", "small", "medium", "large", "enterprise"]);

    let summits = SummitsOutput::gemini_schema();
    let summit = &summits["properties"]["summits"]["items"]["properties"];
    assert_eq!(summit["name"]["type"], "string");
    assert!(summit["website"].get("default").is_none());
}
