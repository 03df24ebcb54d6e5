use bytebot_client::{Client, CreateTaskRequest, Outcome, FAILURE, SUCCESS, WARNING};
use tracing::instrument;

pub const CREDENTIAL_VAR: &str = "OPENROUTER_API_KEY";
pub const DEFAULT_MODEL: &str = "openrouter/auto";
pub const TASKS_PATH: &str = "/tasks";

/// Models Bytebot exposes through OpenRouter. Order is part of the output.
pub const OPENROUTER_MODELS: [&str; 5] = [
    "openrouter/auto",
    "openrouter/anthropic/claude-3.5-sonnet",
    "openrouter/openai/gpt-4o",
    "openrouter/google/gemini-pro",
    "openrouter/meta-llama/llama-3.1-70b",
];

pub const INSTRUCTIONS: [&str; 5] = [
    "To use OpenRouter with Bytebot:",
    "1. Add OPENROUTER_API_KEY=your-key to docker/.env",
    "2. Run: docker-compose -f docker/docker-compose.yml up -d",
    "3. Access the UI at http://localhost:9992",
    "4. Select an OpenRouter model when creating tasks",
];

/// Lines for the credential presence check. An empty value counts as unset.
pub fn credential_report(credential: Option<&str>) -> Vec<String> {
    match credential {
        Some(value) if !value.is_empty() => {
            vec![format!("{SUCCESS} OpenRouter API key found in environment")]
        }
        _ => vec![
            format!("{WARNING} OpenRouter API key not found in environment"),
            format!("   Please set {CREDENTIAL_VAR} in your docker/.env file"),
        ],
    }
}

pub fn model_list_report() -> Vec<String> {
    let mut lines = vec!["Available OpenRouter models in Bytebot:".to_string()];
    lines.extend(OPENROUTER_MODELS.iter().map(|model| format!("  - {model}")));
    lines
}

#[instrument(skip(client, description))]
pub async fn create_task(client: &Client, description: &str, model: &str) -> Outcome {
    let request = CreateTaskRequest::new(description.to_owned(), model.to_owned());
    client.post_json(TASKS_PATH, &request).await
}

/// Lines describing the outcome of `POST /tasks`.
pub fn task_report(outcome: &Outcome, base_url: &str) -> Vec<String> {
    match outcome {
        Outcome::Success(body) => vec![
            format!("{SUCCESS} Successfully sent task to Bytebot with OpenRouter model"),
            format!("Response: {body}"),
        ],
        Outcome::NotFound => vec![format!(
            "{WARNING} Endpoint not found (Bytebot might not be running at {base_url})"
        )],
        Outcome::Failed { status, body } => vec![
            format!("{FAILURE} Failed to send task. Status code: {status}"),
            format!("Response: {body}"),
        ],
        Outcome::ConnectionFailed(_) => vec![format!(
            "{FAILURE} Could not connect to Bytebot. Make sure it's running at {base_url}"
        )],
        Outcome::Error(e) => vec![format!("{FAILURE} Error: {e}")],
    }
}
