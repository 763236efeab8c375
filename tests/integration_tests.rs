//! Integration tests for the launchpad control panel.
//!
//! These drive the axum router end to end with a recording launcher.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use tokio_util::sync::CancellationToken;

use launchpad::{
    build_router, serve_with_shutdown, started_message, Container, ContainerConfig,
    MockProcessLauncher, ProcessLauncher, DEFAULT_APP_URL,
};

fn test_config() -> ContainerConfig {
    ContainerConfig {
        app_dir: ".".to_string(),
        app_url: DEFAULT_APP_URL.to_string(),
        dry_run: true,
        wait_ready: false,
        probe_deadline: Duration::from_secs(1),
    }
}

/// Router plus a handle to the launcher behind it.
fn setup() -> (Arc<MockProcessLauncher>, Router) {
    let launcher = Arc::new(MockProcessLauncher::new());
    let container = Container::with_launcher(test_config(), launcher.clone());
    (launcher, build_router(Arc::new(container)))
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
}

fn post(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_index_serves_the_panel_page() {
    let (_, router) = setup();

    let response = router.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Incentive System Demo"));
    assert!(body.contains("Start server"));
}

#[tokio::test]
async fn test_launch_replies_with_fixed_message_and_spawns_once() {
    let (launcher, router) = setup();

    let response = router.oneshot(post("/api/launch")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, started_message(DEFAULT_APP_URL));

    let commands = launcher.spawned_commands().await;
    assert_eq!(commands.len(), 1);
    assert_eq!(
        commands[0].argv(),
        vec!["npm".to_string(), "start".to_string()]
    );
}

#[tokio::test]
async fn test_launch_reply_is_byte_for_byte_stable() {
    let (launcher, router) = setup();

    let first = router.clone().oneshot(post("/api/launch")).await.unwrap();
    let second = router.oneshot(post("/api/launch")).await.unwrap();

    assert_eq!(body_string(first).await, body_string(second).await);
    assert_eq!(launcher.spawn_count().await, 2);
}

#[tokio::test]
async fn test_spawn_failure_maps_to_500() {
    let launcher = Arc::new(MockProcessLauncher::failing("npm: command not found"));
    let container = Container::with_launcher(test_config(), launcher);
    let router = build_router(Arc::new(container));

    let response = router.oneshot(post("/api/launch")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_string(response).await;
    assert!(body.contains("Spawn error"));
    assert!(body.contains("npm: command not found"));
}

#[tokio::test]
async fn test_status_lists_each_launch() {
    let (_, router) = setup();

    router.clone().oneshot(post("/api/launch")).await.unwrap();
    let response = router.oneshot(get("/api/status")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let views: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    let views = views.as_array().unwrap();

    assert_eq!(views.len(), 1);
    assert_eq!(views[0]["program"], "npm");
    assert_eq!(views[0]["args"][0], "start");
    assert_eq!(views[0]["status"]["state"], "running");
}

#[tokio::test]
async fn test_stop_ends_running_launches() {
    let (_, router) = setup();

    router.clone().oneshot(post("/api/launch")).await.unwrap();
    let response = router.clone().oneshot(post("/api/stop")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "Stopped 1 launch(es).");

    let status = router.oneshot(get("/api/status")).await.unwrap();
    let views: serde_json::Value = serde_json::from_str(&body_string(status).await).unwrap();
    assert_eq!(views[0]["status"]["state"], "exited");
}

#[tokio::test]
async fn test_server_shutdown_stops_running_launches() {
    let launcher = Arc::new(MockProcessLauncher::new());
    let container = Arc::new(Container::with_launcher(test_config(), launcher.clone()));

    let record = container.start_use_case().execute().await.unwrap().launch;
    assert!(launcher.status(&record.id).await.unwrap().is_running());

    // Ephemeral port; the token stands in for ctrl-c.
    let shutdown = CancellationToken::new();
    let server = tokio::spawn(serve_with_shutdown(
        container,
        "127.0.0.1",
        0,
        shutdown.clone(),
    ));

    shutdown.cancel();
    server.await.unwrap().unwrap();

    assert!(!launcher.status(&record.id).await.unwrap().is_running());
}

#[tokio::test]
async fn test_stop_with_nothing_running_is_a_noop() {
    let (_, router) = setup();

    let response = router.oneshot(post("/api/stop")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "Stopped 0 launch(es).");
}
