//! Domain entities and value types
//!
//! Pure business data with no I/O. Everything syncable carries the dual
//! local/remote identifier pair defined in [`newtypes`].

pub mod bookmark;
pub mod cosmetics;
pub mod errors;
pub mod newtypes;
pub mod status;
pub mod task;

pub use bookmark::{Bookmark, BookmarkKind};
pub use cosmetics::{BrowserTitleDescriptor, WallpaperDescriptor, CUSTOM_WALLPAPER_ID};
pub use errors::DomainError;
pub use newtypes::{LocalId, RemoteId};
pub use status::{SyncMode, SyncStatus, SyncTarget};
pub use task::{Priority, Task};
