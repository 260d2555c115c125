//! Basic Gemini client usage example

use gemini_client::{GeminiClient, GenerateRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize from environment
    let client = GeminiClient::from_env()?;

    // Plain generation
    println!("=== Generate Content ===");
    let response = client
        .generate_content(
            GenerateRequest::new("gemini-2.5-flash")
                .user("What is Rust in one sentence?")
                .temperature(0.7)
                .max_output_tokens(100),
        )
        .await?;

    println!("Response: {}", response.text);

    // Grounded generation
    println!("\n=== Grounded (Google Search) ===");
    let response = client
        .generate_content(
            GenerateRequest::new("gemini-2.5-flash")
                .user("Which technology conferences take place in Lisbon this year?")
                .google_search(),
        )
        .await?;

    println!("Grounded: {}", response.grounded);
    println!("Response: {}", response.text);

    Ok(())
}
