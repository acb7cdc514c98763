//! Integration tests for the YaaS HTTP server

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use yaas_server::rate_limit::RateLimiter;
use yaas_server::routes::router;
use yaas_server::state::AppState;

/// Test server setup helper: every test gets its own limiter instance
async fn setup_test_server(
    max_requests: u32,
    window: Duration,
    trust_proxy: bool,
) -> (String, tokio::task::JoinHandle<()>) {
    let limiter = Arc::new(RateLimiter::new(max_requests, window));
    let state = Arc::new(AppState::new(limiter, trust_proxy));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to port");
    let addr = listener.local_addr().expect("Failed to get local address");
    let base_url = format!("http://{}", addr);

    let handle = tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .unwrap();
    });

    (base_url, handle)
}

/// GET /status with a forwarded identity, returning just the status code
async fn status_as(client: &reqwest::Client, base_url: &str, identity: &str) -> u16 {
    client
        .get(format!("{}/status", base_url))
        .header("X-Forwarded-For", identity)
        .send()
        .await
        .expect("Failed to send request")
        .status()
        .as_u16()
}

#[tokio::test]
async fn test_yes_endpoint() {
    let (base_url, _handle) = setup_test_server(100, Duration::from_secs(60), false).await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/", base_url))
        .json(&json!({"question": "will it work?"}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["response"], "yes");
}

#[tokio::test]
async fn test_yes_endpoint_without_body() {
    let (base_url, _handle) = setup_test_server(100, Duration::from_secs(60), false).await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/", base_url))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["response"], "yes");
}

#[tokio::test]
async fn test_status_endpoint() {
    let (base_url, _handle) = setup_test_server(100, Duration::from_secs(60), false).await;

    let response = reqwest::get(format!("{}/status", base_url))
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "operational");
}

#[tokio::test]
async fn test_health_endpoint() {
    let (base_url, _handle) = setup_test_server(100, Duration::from_secs(60), false).await;

    let response = reqwest::get(format!("{}/health", base_url))
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["uptime_seconds"].is_u64());
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let (base_url, _handle) = setup_test_server(100, Duration::from_secs(60), false).await;

    let response = reqwest::get(format!("{}/definitely/not/a/route", base_url))
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 404);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Not Found");
}

#[tokio::test]
async fn test_rate_limit_rejects_after_quota() {
    let (base_url, _handle) = setup_test_server(2, Duration::from_secs(60), true).await;

    let client = reqwest::Client::new();

    assert_eq!(status_as(&client, &base_url, "203.0.113.7").await, 200);
    assert_eq!(status_as(&client, &base_url, "203.0.113.7").await, 200);

    // third request from the same identity is over quota
    let response = client
        .get(format!("{}/status", base_url))
        .header("X-Forwarded-For", "203.0.113.7")
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 429);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Too many requests");
    assert_eq!(body["message"], "Please try again later");

    // a different identity is unaffected
    assert_eq!(status_as(&client, &base_url, "198.51.100.9").await, 200);
}

#[tokio::test]
async fn test_rate_limit_resets_after_window() {
    let (base_url, _handle) = setup_test_server(1, Duration::from_millis(200), true).await;

    let client = reqwest::Client::new();

    assert_eq!(status_as(&client, &base_url, "203.0.113.50").await, 200);
    assert_eq!(status_as(&client, &base_url, "203.0.113.50").await, 429);

    // wait out the window, then the counter starts over
    tokio::time::sleep(Duration::from_millis(250)).await;
    assert_eq!(status_as(&client, &base_url, "203.0.113.50").await, 200);
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let (base_url, _handle) = setup_test_server(100, Duration::from_secs(60), false).await;

    let response = reqwest::get(format!("{}/metrics", base_url))
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 200);

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("yaas_requests_total"));
}
