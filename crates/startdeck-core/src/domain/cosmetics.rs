//! Cosmetic domain values: wallpaper, theme, browser title
//!
//! These domains have no dual identifiers; the server's last full write wins
//! outright, with one exception: a user-supplied custom wallpaper always wins
//! locally and is never overwritten by a pull.

use serde::{Deserialize, Serialize};

/// Reserved id marking a wallpaper the user uploaded themselves
pub const CUSTOM_WALLPAPER_ID: &str = "custom-wallpaper";

/// Active wallpaper descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallpaperDescriptor {
    /// Catalog id, or [`CUSTOM_WALLPAPER_ID`] for a user upload
    pub id: String,
    /// Image source (URL or data reference)
    pub src: String,
}

impl WallpaperDescriptor {
    pub fn new(id: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            src: src.into(),
        }
    }

    /// Returns true if this wallpaper was supplied by the user
    ///
    /// A custom wallpaper is a one-way lock against pulls: it stays in place
    /// until the user picks a catalog wallpaper again through the UI.
    pub fn is_custom(&self) -> bool {
        self.id == CUSTOM_WALLPAPER_ID
    }

    /// Returns true if `other` describes visibly different content
    pub fn differs_from(&self, other: &WallpaperDescriptor) -> bool {
        self.id != other.id || self.src != other.src
    }
}

/// Browser-title cosmetic descriptor (e.g. a "{site} — startdeck" template)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserTitleDescriptor {
    pub id: String,
    pub template: String,
    pub name: String,
}

impl BrowserTitleDescriptor {
    pub fn new(
        id: impl Into<String>,
        template: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            template: template.into(),
            name: name.into(),
        }
    }

    /// Returns true if `other` differs in id, template, or name
    pub fn differs_from(&self, other: &BrowserTitleDescriptor) -> bool {
        self.id != other.id || self.template != other.template || self.name != other.name
    }
}
