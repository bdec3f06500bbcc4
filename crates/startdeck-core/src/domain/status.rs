//! Sync status and request vocabulary
//!
//! [`SyncStatus`] is owned exclusively by the coordinator in
//! `startdeck-sync`; everything else reads it through an accessor. The
//! coordinator transitions it on attempt start/finish, auto-reverts
//! `Success` to `Idle` after a display window, and leaves `Error` in place
//! until the next attempt.

use serde::{Deserialize, Serialize};

/// Status of the sync engine as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    /// Nothing in flight, nothing to report
    Idle,
    /// A sync pass is currently running
    Syncing,
    /// The last pass succeeded (transient, reverts to `Idle`)
    Success,
    /// The last pass failed; persists until the next attempt
    Error,
}

impl SyncStatus {
    /// Returns true if a sync pass is in progress
    pub fn is_syncing(&self) -> bool {
        matches!(self, SyncStatus::Syncing)
    }

    /// Returns true if the last pass failed
    pub fn is_error(&self) -> bool {
        matches!(self, SyncStatus::Error)
    }
}

impl Default for SyncStatus {
    fn default() -> Self {
        SyncStatus::Idle
    }
}

impl std::fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SyncStatus::Idle => "idle",
            SyncStatus::Syncing => "syncing",
            SyncStatus::Success => "success",
            SyncStatus::Error => "error",
        };
        write!(f, "{}", s)
    }
}

/// Which data family a sync request covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncTarget {
    /// Everything via the combined pull endpoint
    All,
    /// Tasks only
    Tasks,
    /// Bookmarks only
    Bookmarks,
}

/// Direction of a per-domain sync request
///
/// `All` is always pull-only; per-domain requests may push local state
/// (including pending deletions) before pulling the server's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncMode {
    /// Fetch the server state and merge it in
    Pull,
    /// Push local entities and tombstones, then merge the response
    PushThenPull,
}
