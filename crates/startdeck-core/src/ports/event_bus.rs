//! Event bus port (driven/secondary port)
//!
//! After any successful domain application, the coordinator publishes one
//! named event per domain with the fully reconciled local collection as
//! payload. Dispatch is synchronous, single-threaded, fire-and-forget: no
//! consumer acknowledgement, no delivery guarantee beyond "ran before this
//! call returned". The coordinator never holds references to subscribers.

use crate::domain::{
    Bookmark, BrowserTitleDescriptor, Task, WallpaperDescriptor,
};

/// An event fanned out to decoupled UI consumers
#[derive(Debug, Clone, PartialEq)]
pub enum DomainEvent {
    /// The reconciled task list changed
    TasksChanged(Vec<Task>),
    /// The reconciled bookmark tree changed
    BookmarksChanged(Vec<Bookmark>),
    /// A pulled wallpaper was applied
    WallpaperChanged(WallpaperDescriptor),
    /// A pulled theme was applied
    ThemeChanged(String),
    /// A pulled browser-title cosmetic was applied
    BrowserTitleChanged(BrowserTitleDescriptor),
}

impl DomainEvent {
    /// Stable topic name for this event
    pub fn topic(&self) -> &'static str {
        match self {
            DomainEvent::TasksChanged(_) => "tasks:changed",
            DomainEvent::BookmarksChanged(_) => "bookmarks:changed",
            DomainEvent::WallpaperChanged(_) => "wallpaper:changed",
            DomainEvent::ThemeChanged(_) => "theme:changed",
            DomainEvent::BrowserTitleChanged(_) => "browser-title:changed",
        }
    }
}

/// Port trait for fire-and-forget event publication
pub trait IEventBus: Send + Sync {
    /// Publishes an event to whoever is listening
    ///
    /// Returns after all currently registered subscribers have run.
    fn publish(&self, event: DomainEvent);
}
