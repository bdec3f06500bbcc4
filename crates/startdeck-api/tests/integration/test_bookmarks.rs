//! Bookmark endpoint tests

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use startdeck_core::ports::IRemoteClient;

use crate::common;

#[tokio::test]
async fn test_fetch_bookmarks_parses_type_field() {
    let (server, client) = common::setup().await;

    Mock::given(method("GET"))
        .and(path("/bookmarks/@me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "srv-f1",
                "title": "Work",
                "type": "folder",
                "order": 0
            },
            {
                "id": "srv-l1",
                "title": "Docs",
                "url": "https://example.com/docs",
                "parentId": "srv-f1",
                "type": "link",
                "order": 1,
                "sticker": "star"
            }
        ])))
        .mount(&server)
        .await;

    let bookmarks = client
        .fetch_bookmarks()
        .await
        .expect("fetch_bookmarks failed");

    assert_eq!(bookmarks.len(), 2);
    assert_eq!(bookmarks[0].kind, "folder");
    assert_eq!(bookmarks[1].kind, "link");
    assert_eq!(bookmarks[1].parent_id.as_deref(), Some("srv-f1"));
    assert_eq!(bookmarks[1].sticker.as_deref(), Some("star"));
}

#[tokio::test]
async fn test_push_bookmarks_body_carries_both_lists() {
    let (server, client) = common::setup().await;

    Mock::given(method("POST"))
        .and(path("/bookmarks/sync"))
        .and(body_partial_json(json!({
            "bookmarks": [{"offlineId": "b1", "title": "Docs", "type": "link"}],
            "deletedBookmarks": []
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "srv-4",
                "offlineId": "b1",
                "title": "Docs",
                "type": "link",
                "order": 0
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let bookmarks = vec![common::wire_bookmark("b1", "Docs")];

    let merged = client
        .push_bookmarks(&bookmarks, &[])
        .await
        .expect("push_bookmarks failed");

    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].id.as_deref(), Some("srv-4"));
}
