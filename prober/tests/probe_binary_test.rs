use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::process::Command;

async fn spawn_mock(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn unused_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("failed to reserve test port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

async fn run_probe(base_url: &str) -> (bool, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_smarts_probe"))
        .args(["--base-url", base_url])
        .output()
        .await
        .expect("failed to run smarts_probe");
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
    )
}

#[tokio::test(flavor = "multi_thread")]
async fn healthy_service_reports_success_for_every_probe() {
    let app = Router::new()
        .route(
            "/smarts/configuration",
            get(|| async { Json(json!({"success": true, "configuration": "default"})) }),
        )
        .route(
            "/smarts/process-task",
            post(|Json(body): Json<Value>| async move {
                let ok = body["description"].is_string()
                    && body["taskId"]
                        .as_str()
                        .is_some_and(|id| id.starts_with("test-task-"));
                Json(json!({"success": ok}))
            }),
        )
        .route(
            "/smarts/evolve",
            post(|| async { Json(json!({"success": true})) }),
        );
    let base_url = spawn_mock(app).await;

    let (success, stdout) = run_probe(&base_url).await;

    assert!(success);
    assert!(stdout.contains("✅ GET /smarts/configuration - Success"), "{stdout}");
    assert!(stdout.contains("Current configuration: default"), "{stdout}");
    assert!(stdout.contains("✅ POST /smarts/process-task - Success"), "{stdout}");
    assert!(stdout.contains("Task result: true"), "{stdout}");
    assert!(stdout.contains("✅ POST /smarts/evolve - Success"), "{stdout}");
    assert!(stdout.contains("Evolution result: true"), "{stdout}");
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_routes_are_reported_as_not_found() {
    let base_url = spawn_mock(Router::new()).await;

    let (success, stdout) = run_probe(&base_url).await;

    assert!(success);
    assert_eq!(stdout.matches("Endpoint not found").count(), 3, "{stdout}");
    assert!(!stdout.contains("❌"), "{stdout}");
}

#[tokio::test(flavor = "multi_thread")]
async fn server_errors_are_reported_with_status() {
    let app = Router::new()
        .route(
            "/smarts/configuration",
            get(|| async { Json(json!({"configuration": {"mode": "fast"}})) }),
        )
        .route(
            "/smarts/process-task",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "orchestrator down") }),
        )
        .route(
            "/smarts/evolve",
            post(|| async { (StatusCode::OK, "not json") }),
        );
    let base_url = spawn_mock(app).await;

    let (success, stdout) = run_probe(&base_url).await;

    assert!(success);
    assert!(stdout.contains(r#"Current configuration: {"mode":"fast"}"#), "{stdout}");
    assert!(
        stdout.contains("❌ POST /smarts/process-task - Failed with status 500"),
        "{stdout}"
    );
    assert!(stdout.contains("   Response: orchestrator down"), "{stdout}");
    assert!(stdout.contains("❌ POST /smarts/evolve - Error:"), "{stdout}");
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_service_still_exits_successfully() {
    let (success, stdout) = run_probe(&unused_base_url()).await;

    assert!(success, "smarts_probe should exit 0 when the service is down");
    assert_eq!(stdout.matches("Could not connect").count(), 3, "{stdout}");
    assert!(stdout.starts_with("SMARTS API Test Script"), "{stdout}");
    assert!(stdout.contains("To run these tests:"), "{stdout}");
}

#[tokio::test(flavor = "multi_thread")]
async fn dropped_connections_are_reported_as_connection_failures() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            drop(stream);
        }
    });

    let (success, stdout) = run_probe(&format!("http://{addr}")).await;

    assert!(success);
    assert_eq!(stdout.matches("Could not connect").count(), 3, "{stdout}");
    assert!(!stdout.contains("❌"), "{stdout}");
}
