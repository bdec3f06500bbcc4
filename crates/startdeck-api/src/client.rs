//! Dashboard API client
//!
//! Provides a typed HTTP client for the dashboard's sync endpoints. Handles
//! authentication headers, JSON serialization, and endpoint construction;
//! merge semantics live upstream in the sync engine, which talks to this
//! client only through the `IRemoteClient` port.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use startdeck_api::ApiClient;
//! use startdeck_core::ports::IRemoteClient;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = ApiClient::new("access-token-here");
//! let snapshot = client.fetch_snapshot().await?;
//! println!("{} tasks on the server", snapshot.tasks.len());
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use tracing::debug;

use startdeck_core::ports::{IRemoteClient, SyncSnapshot, WireBookmark, WireTask};

/// Base URL for the production dashboard API
const API_BASE_URL: &str = "https://api.startdeck.app/v1";

// ============================================================================
// Request bodies
// ============================================================================

/// Body of `POST /tasks/sync`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TaskSyncRequest<'a> {
    tasks: &'a [WireTask],
    deleted_tasks: &'a [WireTask],
}

/// Body of `POST /bookmarks/sync`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BookmarkSyncRequest<'a> {
    bookmarks: &'a [WireBookmark],
    deleted_bookmarks: &'a [WireBookmark],
}

// ============================================================================
// ApiClient
// ============================================================================

/// HTTP client for the dashboard sync endpoints
///
/// Wraps `reqwest::Client` with bearer authentication and base URL
/// construction. One instance per access token; the token is immutable for
/// the client's lifetime and a re-login constructs a fresh client.
pub struct ApiClient {
    client: Client,
    base_url: String,
    access_token: String,
}

impl ApiClient {
    /// Creates a new client with the given access token
    pub fn new(access_token: impl Into<String>) -> Self {
        Self::with_base_url(access_token, API_BASE_URL)
    }

    /// Creates a new client with a custom base URL (useful for testing)
    pub fn with_base_url(access_token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            access_token: access_token.into(),
        }
    }

    /// Creates an authenticated request builder for the given method and path
    ///
    /// Automatically prepends the base URL and adds the Authorization header.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, &url)
            .bearer_auth(&self.access_token)
    }
}

#[async_trait::async_trait]
impl IRemoteClient for ApiClient {
    async fn fetch_snapshot(&self) -> Result<SyncSnapshot> {
        debug!("Fetching combined snapshot from /extension/@me/sync");

        self.request(Method::GET, "/extension/@me/sync")
            .send()
            .await
            .context("Failed to fetch /extension/@me/sync")?
            .error_for_status()
            .context("GET /extension/@me/sync returned error status")?
            .json()
            .await
            .context("Failed to parse snapshot response")
    }

    async fn fetch_tasks(&self) -> Result<Vec<WireTask>> {
        debug!("Fetching tasks from /tasks/@me");

        self.request(Method::GET, "/tasks/@me")
            .send()
            .await
            .context("Failed to fetch /tasks/@me")?
            .error_for_status()
            .context("GET /tasks/@me returned error status")?
            .json()
            .await
            .context("Failed to parse task list response")
    }

    async fn push_tasks(
        &self,
        tasks: &[WireTask],
        deleted: &[WireTask],
    ) -> Result<Vec<WireTask>> {
        debug!(
            tasks = tasks.len(),
            deleted = deleted.len(),
            "Pushing tasks to /tasks/sync"
        );

        let body = TaskSyncRequest {
            tasks,
            deleted_tasks: deleted,
        };
        self.request(Method::POST, "/tasks/sync")
            .json(&body)
            .send()
            .await
            .context("Failed to post /tasks/sync")?
            .error_for_status()
            .context("POST /tasks/sync returned error status")?
            .json()
            .await
            .context("Failed to parse task sync response")
    }

    async fn fetch_bookmarks(&self) -> Result<Vec<WireBookmark>> {
        debug!("Fetching bookmarks from /bookmarks/@me");

        self.request(Method::GET, "/bookmarks/@me")
            .send()
            .await
            .context("Failed to fetch /bookmarks/@me")?
            .error_for_status()
            .context("GET /bookmarks/@me returned error status")?
            .json()
            .await
            .context("Failed to parse bookmark list response")
    }

    async fn push_bookmarks(
        &self,
        bookmarks: &[WireBookmark],
        deleted: &[WireBookmark],
    ) -> Result<Vec<WireBookmark>> {
        debug!(
            bookmarks = bookmarks.len(),
            deleted = deleted.len(),
            "Pushing bookmarks to /bookmarks/sync"
        );

        let body = BookmarkSyncRequest {
            bookmarks,
            deleted_bookmarks: deleted,
        };
        self.request(Method::POST, "/bookmarks/sync")
            .json(&body)
            .send()
            .await
            .context("Failed to post /bookmarks/sync")?
            .error_for_status()
            .context("POST /bookmarks/sync returned error status")?
            .json()
            .await
            .context("Failed to parse bookmark sync response")
    }
}
