use httpmock::prelude::*;

use marquee_client::{config::ApiConfig, http::Client};
use marquee_model::batch::BatchState;

use serde_json::json;

fn client(server: &MockServer) -> Client {
    Client::new(&ApiConfig::new(server.base_url())).unwrap()
}

#[tokio::test]
async fn batch_status() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/admin/batch/status");
            then.status(200).json_body(json!({
                "status": "running",
                "progress": 90,
                "message": "updating index",
                "updated_at": "2025-03-01T12:30:05.123456"
            }));
        })
        .await;

    let status = client(&server).batch_status().await.unwrap();

    mock.assert_async().await;
    assert_eq!(status.status, BatchState::Running);
    assert_eq!(status.progress, 90);
    assert!(status.updated_at.is_some());
}

#[tokio::test]
async fn batch_logs() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/admin/batch/logs");
            then.status(200)
                .json_body(json!({ "logs": "reading data\nwriting hbase\n" }));
        })
        .await;

    let logs = client(&server).batch_logs().await.unwrap();

    mock.assert_async().await;
    assert_eq!(logs.lines().count(), 2);
}

#[tokio::test]
async fn start_batch_posts() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/admin/batch/start");
            then.status(200).json_body(json!({
                "message": "batch job started",
                "status": "running",
                "pid": 4242
            }));
        })
        .await;

    let started = client(&server).start_batch().await.unwrap();

    mock.assert_async().await;
    assert_eq!(started.pid, 4242);
    assert_eq!(started.status, "running");
}

#[tokio::test]
async fn stop_batch_posts() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/admin/batch/stop");
            then.status(200)
                .json_body(json!({ "message": "batch job stopped" }));
        })
        .await;

    let ack = client(&server).stop_batch().await.unwrap();

    mock.assert_async().await;
    assert_eq!(ack.message, "batch job stopped");
}

#[tokio::test]
async fn reload_index_posts() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/admin/index/reload");
            then.status(200)
                .json_body(json!({ "message": "index reloaded" }));
        })
        .await;

    let ack = client(&server).reload_index().await.unwrap();

    mock.assert_async().await;
    assert_eq!(ack.message, "index reloaded");
}
