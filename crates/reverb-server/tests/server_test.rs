//! Integration tests driving the real router over HTTP.

use std::sync::Arc;

use reverb_server::{app, ServerState};

/// Spawns the server on an ephemeral port and returns its base URL.
async fn spawn_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = app(Arc::new(ServerState::new()));

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn chat_echoes_input_and_records_it() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{base}/chat"))
        .json(&serde_json::json!({ "input": "hello" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["input"], "hello");
    assert_eq!(body["output"], "hello");

    let history: serde_json::Value = client
        .get(format!("{base}/history"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(history.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn missing_input_returns_400_without_logging() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{base}/chat"))
        .json(&serde_json::json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Missing input field");

    let history: serde_json::Value = client
        .get(format!("{base}/history"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(history.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn empty_input_is_rejected_like_missing() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{base}/chat"))
        .json(&serde_json::json!({ "input": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Missing input field");
}

#[tokio::test]
async fn history_preserves_request_order() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    for input in ["a", "b"] {
        let res = client
            .post(format!("{base}/chat"))
            .json(&serde_json::json!({ "input": input }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 200);
    }

    let history: serde_json::Value = client
        .get(format!("{base}/history"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let entries = history.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["input"], "a");
    assert_eq!(entries[1]["input"], "b");

    for entry in entries {
        let ts = entry["timestamp"].as_str().unwrap();
        assert!(ts.parse::<chrono::DateTime<chrono::Utc>>().is_ok());
    }
}

#[tokio::test]
async fn health_is_healthy_regardless_of_state() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let check = |client: reqwest::Client, base: String| async move {
        let res = client.get(format!("{base}/health")).send().await.unwrap();
        assert_eq!(res.status(), 200);
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"]
            .as_str()
            .unwrap()
            .parse::<chrono::DateTime<chrono::Utc>>()
            .is_ok());
    };

    check(client.clone(), base.clone()).await;

    client
        .post(format!("{base}/chat"))
        .json(&serde_json::json!({ "input": "ping" }))
        .send()
        .await
        .unwrap();

    check(client, base).await;
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let base = spawn_server().await;

    let res = reqwest::get(format!("{base}/nope")).await.unwrap();
    assert_eq!(res.status(), 404);
}
