//! Local store port (driven/secondary port)
//!
//! This module defines the interface for the scoped key-value store that
//! persists dashboard data across restarts. The store is deliberately
//! minimal: named JSON values, no transactions. A crash between two writes
//! during a combined pull can leave domains out of step with each other;
//! the next successful pull repairs the skew.
//!
//! ## Design Notes
//!
//! - Uses `anyhow::Result` because storage errors are adapter-specific
//!   (extension storage, files, memory) and don't need domain-level
//!   classification.
//! - Values are `serde_json::Value` at the port boundary; callers serialize
//!   their domain types on the way in and out.

use serde_json::Value;

/// The named slots this engine reads and writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    /// The live task list
    Tasks,
    /// Tombstones for locally deleted tasks, pending server confirmation
    DeletedTasks,
    /// The live bookmark tree
    Bookmarks,
    /// Active wallpaper descriptor
    Wallpaper,
    /// Active theme identifier
    Theme,
    /// Browser-title cosmetic descriptor
    BrowserTitle,
}

impl StoreKey {
    /// Stable storage key string for this slot
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKey::Tasks => "tasks",
            StoreKey::DeletedTasks => "deleted_tasks",
            StoreKey::Bookmarks => "bookmarks",
            StoreKey::Wallpaper => "wallpaper",
            StoreKey::Theme => "theme",
            StoreKey::BrowserTitle => "browser_title",
        }
    }
}

impl std::fmt::Display for StoreKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Port trait for the durable local key-value store
#[async_trait::async_trait]
pub trait ILocalStore: Send + Sync {
    /// Reads the value stored under `key`, or `None` if the slot is empty
    async fn get(&self, key: StoreKey) -> anyhow::Result<Option<Value>>;

    /// Replaces the value stored under `key`
    async fn set(&self, key: StoreKey, value: Value) -> anyhow::Result<()>;
}
