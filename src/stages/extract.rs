use anyhow::{Context, Result};
use serde_json::Value;

use crate::error::PipelineError;
use crate::llm::{ChatOptions, EXTRACTION_SYSTEM_PROMPT, build_extraction_prompt};
use crate::models::{ActionItem, Priority};
use crate::stages::RunMode;

/// Execute the extraction stage: transcript in, ordered action items out.
pub async fn execute_extraction(
    mode: &RunMode,
    transcript: &str,
) -> Result<Vec<ActionItem>, PipelineError> {
    let client = match mode {
        RunMode::Mock => return Ok(mock_action_items()),
        RunMode::Live(client) => client,
    };

    let response = client
        .chat(
            EXTRACTION_SYSTEM_PROMPT,
            &build_extraction_prompt(transcript),
            ChatOptions {
                max_tokens: 800,
                temperature: 0.1,
                json_response: true,
            },
        )
        .await
        .map_err(PipelineError::Extraction)?;

    parse_action_items(&response).map_err(PipelineError::Extraction)
}

/// Parse the model's JSON response into action items.
///
/// Accepted shapes: an object whose "action_items" field holds an array, or
/// a bare array. Any other valid JSON shape yields an empty list; invalid
/// JSON is an error.
pub fn parse_action_items(response: &str) -> Result<Vec<ActionItem>> {
    let value: Value =
        serde_json::from_str(response).context("Action item response is not valid JSON")?;

    let entries = match value {
        Value::Array(entries) => entries,
        Value::Object(mut fields) => match fields.remove("action_items") {
            Some(Value::Array(entries)) => entries,
            _ => return Ok(Vec::new()),
        },
        _ => return Ok(Vec::new()),
    };

    entries
        .into_iter()
        .map(|entry| serde_json::from_value(entry).context("Malformed action item entry"))
        .collect()
}

/// Canned action items returned in mock mode
pub fn mock_action_items() -> Vec<ActionItem> {
    vec![
        ActionItem {
            task: "Complete user authentication API development".to_string(),
            owner: "John".to_string(),
            deadline: "Friday".to_string(),
            priority: Priority::High,
            context: "70% complete, final 30% remaining".to_string(),
        },
        ActionItem {
            task: "Resolve database schema issues for user profile structure".to_string(),
            owner: "Lisa".to_string(),
            deadline: "Wednesday".to_string(),
            priority: Priority::High,
            context: "Requires collaboration with John on database schema".to_string(),
        },
        ActionItem {
            task: "Schedule session with John to review user profile requirements".to_string(),
            owner: "Lisa".to_string(),
            deadline: "Tomorrow morning".to_string(),
            priority: Priority::High,
            context: "Dependencies: Database schema resolution".to_string(),
        },
        ActionItem {
            task: "Update staging environment for testing".to_string(),
            owner: "Not specified".to_string(),
            deadline: "Thursday".to_string(),
            priority: Priority::Medium,
            context: "Required for Mike to run full test suite".to_string(),
        },
        ActionItem {
            task: "Begin comprehensive testing of authentication flow".to_string(),
            owner: "Mike".to_string(),
            deadline: "After API completion".to_string(),
            priority: Priority::Medium,
            context: "Test cases already prepared, waiting for API completion".to_string(),
        },
        ActionItem {
            task: "Attend follow-up meeting to review progress".to_string(),
            owner: "All team members".to_string(),
            deadline: "Next Monday".to_string(),
            priority: Priority::Medium,
            context: "Regular progress review meeting".to_string(),
        },
    ]
}
