mod outcome;

pub use outcome::{render_field, Outcome};

use serde::Serialize;
use std::fmt::Debug;
use tracing::instrument;

pub const SUCCESS: &str = "✅";
pub const WARNING: &str = "⚠️ ";
pub const FAILURE: &str = "❌";

pub const DEFAULT_BASE_URL: &str = "http://localhost:9991";
pub const DEFAULT_DESCRIPTION: &str = "What is the capital of France?";

/// Body of `POST /smarts/process-task`.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProcessTaskRequest {
    pub description: String,
    pub task_id: String,
}

impl ProcessTaskRequest {
    pub fn new(description: String, task_id: String) -> Self {
        Self {
            description,
            task_id,
        }
    }
}

/// Body of `POST /tasks`.
#[derive(Serialize, Debug, Clone)]
pub struct CreateTaskRequest {
    pub description: String,
    pub model: String,
}

impl CreateTaskRequest {
    pub fn new(description: String, model: String) -> Self {
        Self { description, model }
    }
}

/// Single-shot JSON-over-HTTP client bound to one Bytebot base URL.
///
/// Every call resolves to an [`Outcome`]; transport and status failures are
/// classified instead of returned as errors.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Client {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, path: &str) -> Outcome {
        let url = self.url(path);
        tracing::info!("GET {}", url);
        classify(self.http.get(&url).send().await).await
    }

    #[instrument(skip(self))]
    pub async fn post(&self, path: &str) -> Outcome {
        let url = self.url(path);
        tracing::info!("POST {}", url);
        classify(self.http.post(&url).send().await).await
    }

    #[instrument(skip(self, payload))]
    pub async fn post_json<T>(&self, path: &str, payload: &T) -> Outcome
    where
        T: Serialize + Debug + ?Sized,
    {
        let url = self.url(path);
        tracing::info!("POST {} with {:?}", url, payload);
        classify(self.http.post(&url).json(payload).send().await).await
    }
}

async fn classify(result: reqwest::Result<reqwest::Response>) -> Outcome {
    let response = match result {
        Ok(response) => response,
        Err(e) => {
            tracing::debug!("Request failed: {:?}", e);
            return Outcome::from_send_error(&e);
        }
    };

    let status = response.status();
    tracing::debug!("Response status: {}", status);

    match response.text().await {
        Ok(body) => Outcome::from_response(status, &body),
        Err(e) => {
            tracing::debug!("Failed to read response body: {:?}", e);
            Outcome::Error(e.to_string())
        }
    }
}
