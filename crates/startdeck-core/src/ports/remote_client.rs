//! Remote client port (driven/secondary port)
//!
//! This module defines the interface to the dashboard's sync endpoints and
//! the wire DTOs exchanged with them.
//!
//! On the wire the identifier roles invert for transport clarity: the field
//! named `id` carries the *remote* id (when known) and `offlineId` carries
//! the *local* id, so the server can echo back which local entity it is
//! answering for even for entities it has never seen. Records authored on a
//! different device may arrive with no `offlineId` at all.
//!
//! ## Design Notes
//!
//! - Uses `anyhow::Result`; transport failures carry no structured retry
//!   metadata, and the caller treats any error as "this attempt failed".
//! - Timeouts are the adapter's concern; this port imposes none.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{
    BrowserTitleDescriptor, Priority, WallpaperDescriptor,
};

// ============================================================================
// Wire DTOs
// ============================================================================

/// Task record as sent to / received from the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireTask {
    /// Remote id; absent for entities the server has never accepted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Local id echo; absent only for records authored on another device
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offline_id: Option<String>,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub priority: Priority,
    pub completed: bool,
    pub order: u32,
}

/// Bookmark record as sent to / received from the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireBookmark {
    /// Remote id; absent for entities the server has never accepted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Local id echo; absent only for records authored on another device
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offline_id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Local id of the parent folder, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// "link" or "folder"
    #[serde(rename = "type")]
    pub kind: String,
    pub order: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_background: Option<String>,
}

/// Everything the combined pull endpoint returns in one response
///
/// Ephemeral: each member is diffed against its own store slot and applied
/// independently; the snapshot itself is never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncSnapshot {
    #[serde(default)]
    pub bookmarks: Vec<WireBookmark>,
    #[serde(default)]
    pub tasks: Vec<WireTask>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallpaper: Option<WallpaperDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser_title: Option<BrowserTitleDescriptor>,
}

// ============================================================================
// IRemoteClient trait
// ============================================================================

/// Port trait for the authenticated sync endpoints
///
/// The coordinator in `startdeck-sync` is the only sync-purpose caller of
/// this port. Push operations carry a side list of deletion payloads so the
/// server can hard-delete matching remote records in the same request.
#[async_trait::async_trait]
pub trait IRemoteClient: Send + Sync {
    /// `GET /extension/@me/sync` - full pull of every syncable domain
    async fn fetch_snapshot(&self) -> anyhow::Result<SyncSnapshot>;

    /// `GET /tasks/@me`
    async fn fetch_tasks(&self) -> anyhow::Result<Vec<WireTask>>;

    /// `POST /tasks/sync` - push local tasks and tombstones, receive the
    /// server's canonical task list
    async fn push_tasks(
        &self,
        tasks: &[WireTask],
        deleted: &[WireTask],
    ) -> anyhow::Result<Vec<WireTask>>;

    /// `GET /bookmarks/@me`
    async fn fetch_bookmarks(&self) -> anyhow::Result<Vec<WireBookmark>>;

    /// `POST /bookmarks/sync` - push local bookmarks and tombstones, receive
    /// the server's canonical bookmark list
    async fn push_bookmarks(
        &self,
        bookmarks: &[WireBookmark],
        deleted: &[WireBookmark],
    ) -> anyhow::Result<Vec<WireBookmark>>;
}
