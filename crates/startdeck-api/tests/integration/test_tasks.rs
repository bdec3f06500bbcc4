//! Task endpoint tests
//!
//! Verifies the auth header, the shape of the POST /tasks/sync body, and
//! that error statuses surface as errors instead of empty lists.

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use startdeck_core::ports::IRemoteClient;

use crate::common;

#[tokio::test]
async fn test_fetch_tasks_sends_bearer_token() {
    let (server, client) = common::setup().await;

    Mock::given(method("GET"))
        .and(path("/tasks/@me"))
        .and(header(
            "Authorization",
            format!("Bearer {}", common::TEST_TOKEN).as_str(),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "srv-1",
                "text": "water plants",
                "date": "2026-08-29",
                "priority": "high",
                "completed": false,
                "order": 0
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let tasks = client.fetch_tasks().await.expect("fetch_tasks failed");

    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id.as_deref(), Some("srv-1"));
    assert!(tasks[0].offline_id.is_none());
}

#[tokio::test]
async fn test_push_tasks_body_carries_both_lists() {
    let (server, client) = common::setup().await;

    Mock::given(method("POST"))
        .and(path("/tasks/sync"))
        .and(body_partial_json(json!({
            "tasks": [{"offlineId": "t1", "text": "buy milk"}],
            "deletedTasks": [{"offlineId": "t2", "text": "old"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "srv-9",
                "offlineId": "t1",
                "text": "buy milk",
                "date": "2026-08-29",
                "priority": "medium",
                "completed": false,
                "order": 0
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let tasks = vec![common::wire_task("t1", "buy milk")];
    let deleted = vec![common::wire_task("t2", "old")];

    let merged = client
        .push_tasks(&tasks, &deleted)
        .await
        .expect("push_tasks failed");

    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].id.as_deref(), Some("srv-9"));
    assert_eq!(merged[0].offline_id.as_deref(), Some("t1"));
}

#[tokio::test]
async fn test_server_error_surfaces_as_error() {
    let (server, client) = common::setup().await;

    Mock::given(method("GET"))
        .and(path("/tasks/@me"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = client.fetch_tasks().await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_unauthorized_push_is_an_error() {
    let (server, client) = common::setup().await;

    Mock::given(method("POST"))
        .and(path("/tasks/sync"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = client.push_tasks(&[], &[]).await;
    assert!(result.is_err());
}
