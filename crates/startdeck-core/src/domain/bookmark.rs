//! Bookmark domain entity
//!
//! Bookmarks form a tree: a bookmark with `parent_id` set must reference the
//! `local_id` of a folder bookmark in the same collection. The UI upholds
//! that invariant (no cycles, no dangling parents); the sync layer does not
//! validate or repair trees, it only preserves what it is given.

use serde::{Deserialize, Serialize};

use super::errors::DomainError;
use super::newtypes::{LocalId, RemoteId};

/// Kind of bookmark node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookmarkKind {
    /// A leaf pointing at a URL
    Link,
    /// A folder that other bookmarks may reference as parent
    Folder,
}

impl std::str::FromStr for BookmarkKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "link" => Ok(BookmarkKind::Link),
            "folder" => Ok(BookmarkKind::Folder),
            other => Err(DomainError::InvalidBookmarkKind(other.to_string())),
        }
    }
}

/// A bookmark tile or folder on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    /// Client-assigned identity, stable across merges
    pub local_id: LocalId,
    /// Server-assigned identity; `None` until the first successful round trip
    pub remote_id: Option<RemoteId>,
    /// Display title
    pub title: String,
    /// Target URL; `None` for folders
    pub url: Option<String>,
    /// Local id of the containing folder; `None` for root items
    pub parent_id: Option<LocalId>,
    /// Link or folder
    pub kind: BookmarkKind,
    /// Position among siblings
    pub order: u32,
    /// Optional decorative sticker id
    pub sticker: Option<String>,
    /// Optional per-tile text color override
    pub custom_text_color: Option<String>,
    /// Optional per-tile background override
    pub custom_background: Option<String>,
}

impl Bookmark {
    /// Creates a root-level link bookmark with a fresh local id
    pub fn link(title: impl Into<String>, url: impl Into<String>, order: u32) -> Self {
        Self {
            local_id: LocalId::generate(),
            remote_id: None,
            title: title.into(),
            url: Some(url.into()),
            parent_id: None,
            kind: BookmarkKind::Link,
            order,
            sticker: None,
            custom_text_color: None,
            custom_background: None,
        }
    }

    /// Creates a root-level folder with a fresh local id
    pub fn folder(title: impl Into<String>, order: u32) -> Self {
        Self {
            local_id: LocalId::generate(),
            remote_id: None,
            title: title.into(),
            url: None,
            parent_id: None,
            kind: BookmarkKind::Folder,
            order,
            sticker: None,
            custom_text_color: None,
            custom_background: None,
        }
    }

    /// Places this bookmark inside the given folder
    #[must_use]
    pub fn with_parent(mut self, parent: LocalId) -> Self {
        self.parent_id = Some(parent);
        self
    }

    /// Returns true if this bookmark sits at the root of the tree
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
