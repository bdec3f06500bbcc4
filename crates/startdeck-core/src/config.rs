//! Configuration module for Startdeck.
//!
//! Provides typed configuration structs that map to the YAML configuration
//! file, with loading, validation defaults, and duration helpers. The timing
//! knobs exist mostly so tests can shrink them; the defaults are the
//! product behavior.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level configuration for the sync engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub sync: SyncSettings,
    pub api: ApiSettings,
    pub logging: LoggingConfig,
}

/// Synchronization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncSettings {
    /// Whether sync is enabled at all. When false every request is dropped
    /// by the feature guard.
    pub enabled: bool,
    /// Leading-edge throttle window between accepted requests, in
    /// milliseconds. Shared across all targets.
    pub throttle_ms: u64,
    /// How long the `Success` status stays visible before reverting to
    /// `Idle`, in milliseconds.
    pub status_revert_ms: u64,
    /// Delay between authentication being confirmed and the one-shot
    /// initial full pull, in milliseconds.
    pub initial_sync_delay_ms: u64,
}

impl SyncSettings {
    /// Throttle window as a [`Duration`].
    pub fn throttle_window(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }

    /// Success display window as a [`Duration`].
    pub fn status_revert(&self) -> Duration {
        Duration::from_millis(self.status_revert_ms)
    }

    /// Initial sync delay as a [`Duration`].
    pub fn initial_sync_delay(&self) -> Duration {
        Duration::from_millis(self.initial_sync_delay_ms)
    }
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            throttle_ms: 500,
            status_revert_ms: 3_000,
            initial_sync_delay_ms: 1_000,
        }
    }
}

/// Remote API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL of the dashboard API.
    pub base_url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.startdeck.app".to_string(),
        }
    }
}

/// Logging / tracing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: `trace`, `debug`, `info`, `warn`, or `error`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file at `path`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Try to load from `path`; fall back to [`Config::default`] on any error.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Platform-appropriate default path for the configuration file.
    ///
    /// Typically `$XDG_CONFIG_HOME/startdeck/config.yaml` on Linux.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("startdeck")
            .join("config.yaml")
    }
}
