//! Question submission client.
//!
//! Command-line counterpart of the browser admin form: reads a question
//! payload from a JSON file, validates it locally with the same typed schema
//! the server uses, and submits it with the caller's bearer token.
//!
//! Usage:
//!   QBANK_TOKEN=<access token> addquestion question.json
//!
//! The API base URL defaults to http://localhost:3000 and can be overridden
//! with QBANK_API_URL.

use std::env;

use anyhow::{bail, Context};
use validator::Validate;

use qbank_server::models::question::{CreateQuestion, Question};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let path = env::args()
        .nth(1)
        .context("Usage: addquestion <question.json>")?;

    let token = env::var("QBANK_TOKEN").context("QBANK_TOKEN is not set")?;
    let base_url =
        env::var("QBANK_API_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path))?;
    let payload: CreateQuestion =
        serde_json::from_str(&raw).context("Payload does not match the question schema")?;

    // Surface field errors before going over the wire
    payload
        .validate()
        .context("Payload failed field validation")?;

    let response = reqwest::Client::new()
        .post(format!("{}/api/admin/addQuestion", base_url))
        .bearer_auth(&token)
        .json(&payload)
        .send()
        .await
        .context("Request failed")?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        bail!("Server rejected the question ({}): {}", status, body);
    }

    let created: Question = response.json().await.context("Unexpected response body")?;
    println!("Created question {} ({} {})", created.id, created.exam_id, created.year_asked);

    Ok(())
}
