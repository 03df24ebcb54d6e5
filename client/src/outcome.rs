use reqwest::StatusCode;
use serde_json::Value;

/// Classification of a single request attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// HTTP 200 with a JSON body.
    Success(Value),
    /// HTTP 404, the service or route is not deployed.
    NotFound,
    Failed { status: u16, body: String },
    ConnectionFailed(String),
    Error(String),
}

impl Outcome {
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        match status {
            StatusCode::OK => match serde_json::from_str(body) {
                Ok(value) => Outcome::Success(value),
                Err(e) => Outcome::Error(format!("invalid JSON in response: {e}")),
            },
            StatusCode::NOT_FOUND => Outcome::NotFound,
            _ => Outcome::Failed {
                status: status.as_u16(),
                body: body.to_owned(),
            },
        }
    }

    /// Classifies an error returned by `send`. Everything except builder and
    /// redirect errors is a connection failure, including connections the
    /// server closes right after accepting.
    pub fn from_send_error(error: &reqwest::Error) -> Self {
        if error.is_builder() || error.is_redirect() {
            Outcome::Error(error.to_string())
        } else {
            Outcome::ConnectionFailed(error.to_string())
        }
    }
}

/// Renders `key` of a JSON object for display, `N/A` when missing.
pub fn render_field(body: &Value, key: &str) -> String {
    match body.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(value) => value.to_string(),
        None => "N/A".to_string(),
    }
}
