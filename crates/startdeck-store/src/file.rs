//! File-backed local store
//!
//! Each [`StoreKey`] maps to `<dir>/<key>.json`. Writes go through a
//! temporary file in the same directory followed by a rename, so a crash
//! mid-write never leaves a half-written slot behind.

use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use startdeck_core::ports::{ILocalStore, StoreKey};

/// JSON-file-per-slot implementation of the local store port
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`. The directory is created lazily on
    /// the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the default data directory.
    pub fn default_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("~/.local/share"))
            .join("startdeck")
    }

    fn slot_path(&self, key: StoreKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_str()))
    }

    async fn ensure_dir(&self) -> anyhow::Result<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("Failed to create data directory {}", self.dir.display()))
    }

    async fn write_atomic(&self, path: &Path, contents: &str) -> anyhow::Result<()> {
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, contents)
            .await
            .with_context(|| format!("Failed to write {}", tmp.display()))?;
        tokio::fs::rename(&tmp, path)
            .await
            .with_context(|| format!("Failed to move {} into place", tmp.display()))
    }
}

#[async_trait]
impl ILocalStore for FileStore {
    async fn get(&self, key: StoreKey) -> anyhow::Result<Option<Value>> {
        let path = self.slot_path(key);
        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(%key, "Slot not present on disk");
                return Ok(None);
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()));
            }
        };

        let value: Value = serde_json::from_str(&contents)
            .with_context(|| format!("Corrupt JSON in {}", path.display()))?;
        Ok(Some(value))
    }

    async fn set(&self, key: StoreKey, value: Value) -> anyhow::Result<()> {
        self.ensure_dir().await?;
        let path = self.slot_path(key);
        let contents = serde_json::to_string_pretty(&value)
            .with_context(|| format!("Failed to serialize slot {key}"))?;
        self.write_atomic(&path, &contents).await?;
        debug!(%key, path = %path.display(), "Slot written");
        Ok(())
    }
}
