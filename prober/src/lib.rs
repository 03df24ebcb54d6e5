use bytebot_client::{
    render_field, Client, Outcome, ProcessTaskRequest, FAILURE, SUCCESS, WARNING,
};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::instrument;

pub const INSTRUCTIONS: [&str; 4] = [
    "To run these tests:",
    "1. Start Bytebot: docker-compose -f docker/docker-compose.yml up -d",
    "2. Wait for services to start (check http://localhost:9992)",
    "3. Run this script again",
];

/// The SMARTS endpoints exercised by the prober, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    Configuration,
    ProcessTask,
    Evolve,
}

impl Probe {
    pub const ALL: [Probe; 3] = [Probe::Configuration, Probe::ProcessTask, Probe::Evolve];

    pub fn path(&self) -> &'static str {
        match self {
            Probe::Configuration => "/smarts/configuration",
            Probe::ProcessTask => "/smarts/process-task",
            Probe::Evolve => "/smarts/evolve",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Probe::Configuration => "GET /smarts/configuration",
            Probe::ProcessTask => "POST /smarts/process-task",
            Probe::Evolve => "POST /smarts/evolve",
        }
    }

    #[instrument(skip(client, description))]
    pub async fn send(&self, client: &Client, description: &str) -> Outcome {
        match self {
            Probe::Configuration => client.get(self.path()).await,
            Probe::ProcessTask => {
                let request =
                    ProcessTaskRequest::new(description.to_owned(), task_id(SystemTime::now()));
                client.post_json(self.path(), &request).await
            }
            Probe::Evolve => client.post(self.path()).await,
        }
    }

    /// Console lines describing `outcome` for this probe.
    pub fn report(&self, outcome: &Outcome) -> Vec<String> {
        let label = self.label();
        match outcome {
            Outcome::Success(body) => vec![
                format!("{SUCCESS} {label} - Success"),
                self.detail(body),
            ],
            Outcome::NotFound => vec![format!(
                "{WARNING} {label} - Endpoint not found (API might not be running)"
            )],
            Outcome::Failed { status, body } => {
                let mut lines = vec![format!("{FAILURE} {label} - Failed with status {status}")];
                if *self == Probe::ProcessTask {
                    lines.push(format!("   Response: {body}"));
                }
                lines
            }
            Outcome::ConnectionFailed(_) => vec![format!(
                "{WARNING} {label} - Could not connect (API might not be running)"
            )],
            Outcome::Error(e) => vec![format!("{FAILURE} {label} - Error: {e}")],
        }
    }

    fn detail(&self, body: &serde_json::Value) -> String {
        match self {
            Probe::Configuration => format!(
                "   Current configuration: {}",
                render_field(body, "configuration")
            ),
            Probe::ProcessTask => format!("   Task result: {}", render_field(body, "success")),
            Probe::Evolve => format!("   Evolution result: {}", render_field(body, "success")),
        }
    }
}

pub fn task_id(now: SystemTime) -> String {
    let secs = now
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    format!("test-task-{secs}")
}
