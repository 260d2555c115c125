//! Structured output example with a schema derived from a Rust type

use gemini_client::GeminiClient;
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
struct Person {
    /// The person's name
    name: String,
    /// The person's age
    age: u32,
    /// The person's job
    occupation: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = GeminiClient::from_env()?;

    let person: Person = client
        .extract(
            "gemini-2.5-flash",
            "Extract person information: John Smith is a 35 year old software engineer.",
        )
        .await?;

    println!("Parsed:");
    println!("  Name: {}", person.name);
    println!("  Age: {}", person.age);
    println!("  Occupation: {}", person.occupation);

    Ok(())
}
