//! LLM prompts for summit search, company search and structuring.
//!
//! Placeholders are filled in a single pass over the template, so braces in
//! substituted values are copied through verbatim.

use crate::types::{CompanyField, CompanyScale, Summit, TimeInterval};

/// Grounded prompt for finding summits in a location and period.
pub const SUMMIT_SEARCH_PROMPT: &str = r#"Search for technology summits and conferences in {location} {time_interval}.

Return a list of summits with: name, dates, categories (focus areas), website URL, and venue."#;

/// Grounded prompt for finding the companies present at one summit.
pub const COMPANIES_PROMPT: &str = r#"Search for companies that participated in or sponsored the tech summit: {summit_name}.

Summit details:
- Name: {summit_name}
- Dates: {summit_dates}
- Website: {summit_website}
- Venue: {summit_venue}

Find an extensive list of companies that have participated in, sponsored, exhibited at, or presented at this summit.

For each company, provide:
1. name: The official company name
2. origin_country: The country where the company is headquartered
3. field: Must be one of: {field_values}
4. scale: Must be one of: {scale_values}

Include all types of participants: major sponsors, exhibitors, startups in startup alleys, presenting companies, and any other corporate participants.

Return as many companies as you can find that are associated with this summit."#;

/// Ungrounded prompt for turning free text into schema-constrained JSON.
pub const STRUCTURIZE_PROMPT: &str = r#"Extract and structure all information from the following text into the required JSON format.

Important: Ensure NO data from the text is missed. Extract every relevant piece of information that matches the schema fields.

Text to structure:
{text}

Return a complete JSON object matching the required schema."#;

const NOT_AVAILABLE: &str = "N/A";

/// Format the summit search prompt.
pub fn format_summit_search_prompt(location: &str, time_interval: &TimeInterval) -> String {
    render(
        SUMMIT_SEARCH_PROMPT,
        &[
            ("location", location),
            ("time_interval", time_interval.describe().as_str()),
        ],
    )
}

/// Format the company search prompt for a summit.
pub fn format_companies_prompt(summit: &Summit) -> String {
    render(
        COMPANIES_PROMPT,
        &[
            ("summit_name", summit.name.as_str()),
            ("summit_dates", summit.dates.as_str()),
            (
                "summit_website",
                summit.website.as_deref().unwrap_or(NOT_AVAILABLE),
            ),
            (
                "summit_venue",
                summit.venue.as_deref().unwrap_or(NOT_AVAILABLE),
            ),
            ("field_values", field_values().as_str()),
            ("scale_values", scale_values().as_str()),
        ],
    )
}

/// Format the structuring prompt.
pub fn format_structurize_prompt(text: &str) -> String {
    render(STRUCTURIZE_PROMPT, &[("text", text)])
}

/// Replace each `{key}` in `template` with its value. Unknown keys are kept.
fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];

        let value = tail.find('}').and_then(|close| {
            let key = &tail[1..close];
            values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value, close))
        });

        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &tail[close + 1..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn field_values() -> String {
    CompanyField::ALL
        .iter()
        .map(CompanyField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn scale_values() -> String {
    CompanyScale::ALL
        .iter()
        .map(CompanyScale::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
