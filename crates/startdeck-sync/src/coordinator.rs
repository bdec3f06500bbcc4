//! Sync coordinator
//!
//! The [`SyncCoordinator`] is the stateful orchestrator and the only
//! component allowed to call the remote client for sync purposes. It owns
//! the [`SyncStatus`], enforces the request guards, drives the full-pull
//! and per-domain push/pull flows, and publishes reconciled results through
//! the event bus.
//!
//! ## Guards
//!
//! Evaluated in order on every [`request`](SyncCoordinator::request); each
//! is an early return with no state change:
//!
//! 1. **Rate** - leading-edge throttle on a single shared timestamp,
//!    regardless of target. Dropped calls are not queued or retried.
//! 2. **Auth** - drop while unauthenticated.
//! 3. **Feature** - drop while sync is disabled in settings.
//! 4. **Mutual exclusion** - one global in-flight flag; at most one sync
//!    body runs system-wide, even for a different target.
//!
//! ## Concurrency model
//!
//! Single logical critical section. The in-flight flag and the throttle
//! timestamp are the only shared mutable scalars, mutated only here. There
//! is no cancellation: once a body starts it runs to completion before the
//! flag is released, and the flag is released unconditionally so a failed
//! attempt never wedges future syncs. Timeouts belong to the transport.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Instant;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use startdeck_core::config::SyncSettings;
use startdeck_core::domain::{
    Bookmark, BrowserTitleDescriptor, SyncMode, SyncStatus, SyncTarget, Task,
    WallpaperDescriptor,
};
use startdeck_core::ports::{
    DomainEvent, IAuthContext, IEventBus, ILocalStore, IRemoteClient, StoreKey,
};

use crate::reconcile::{BookmarkReconciler, EntityReconciler, TaskReconciler};

// ============================================================================
// Request outcome
// ============================================================================

/// Why a request was dropped before any sync work started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// Less than the throttle window since the last accepted request
    Throttled,
    /// The caller is not authenticated
    Unauthenticated,
    /// Sync is disabled in settings
    Disabled,
    /// Another sync body is already in flight
    AlreadySyncing,
}

/// Result of a [`SyncCoordinator::request`] call
///
/// Drops are silent no-ops from the user's perspective; the variant exists
/// so callers and tests can observe guard behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// The sync body ran and succeeded
    Synced,
    /// The sync body ran and failed; status is now `Error`
    Failed,
    /// A guard rejected the request; no state changed
    Dropped(DropReason),
}

/// Status value plus a generation counter so a stale auto-revert timer can
/// recognize it has been superseded
struct StatusCell {
    status: SyncStatus,
    epoch: u64,
}

// ============================================================================
// SyncCoordinator
// ============================================================================

/// Stateful sync orchestrator
///
/// Designed to be shared as `Arc<SyncCoordinator>`; all methods take
/// `&self`.
pub struct SyncCoordinator {
    /// Durable local key-value store
    store: Arc<dyn ILocalStore>,
    /// Authenticated sync endpoints
    remote: Arc<dyn IRemoteClient>,
    /// Fire-and-forget fan-out to UI consumers
    bus: Arc<dyn IEventBus>,
    /// Read-only auth signal
    auth: Arc<dyn IAuthContext>,
    /// Timing and feature settings
    settings: SyncSettings,
    /// User-visible status, owned exclusively by this coordinator
    status: Arc<Mutex<StatusCell>>,
    /// Mutual-exclusion flag: true while a sync body is running
    in_flight: AtomicBool,
    /// Timestamp of the last request that passed the rate guard
    last_accepted: Mutex<Option<Instant>>,
}

impl SyncCoordinator {
    /// Creates a coordinator wired to its four collaborators
    pub fn new(
        store: Arc<dyn ILocalStore>,
        remote: Arc<dyn IRemoteClient>,
        bus: Arc<dyn IEventBus>,
        auth: Arc<dyn IAuthContext>,
        settings: SyncSettings,
    ) -> Self {
        Self {
            store,
            remote,
            bus,
            auth,
            settings,
            status: Arc::new(Mutex::new(StatusCell {
                status: SyncStatus::Idle,
                epoch: 0,
            })),
            in_flight: AtomicBool::new(false),
            last_accepted: Mutex::new(None),
        }
    }

    /// Current user-visible status
    pub fn status(&self) -> SyncStatus {
        self.status.lock().unwrap().status
    }

    // ========================================================================
    // request()
    // ========================================================================

    /// Requests a sync pass for `target` in `mode`
    ///
    /// Runs the guards in order, then the sync body to completion. Callers
    /// that get [`RequestOutcome::Dropped`] must re-trigger later if they
    /// still want a sync; nothing is queued.
    #[tracing::instrument(skip(self))]
    pub async fn request(&self, target: SyncTarget, mode: SyncMode) -> RequestOutcome {
        // Guard 1: rate. Leading edge - the timestamp is recorded as soon
        // as this guard passes, even if a later guard drops the call.
        {
            let mut last = self.last_accepted.lock().unwrap();
            let now = Instant::now();
            if let Some(prev) = *last {
                if now.duration_since(prev) < self.settings.throttle_window() {
                    debug!("Sync request dropped: throttled");
                    return RequestOutcome::Dropped(DropReason::Throttled);
                }
            }
            *last = Some(now);
        }

        // Guard 2: auth.
        if !self.auth.is_authenticated() {
            debug!("Sync request dropped: not authenticated");
            return RequestOutcome::Dropped(DropReason::Unauthenticated);
        }

        // Guard 3: feature flag.
        if !self.settings.enabled {
            debug!("Sync request dropped: sync disabled in settings");
            return RequestOutcome::Dropped(DropReason::Disabled);
        }

        // Guard 4: mutual exclusion. swap() both checks and claims the
        // critical section in one step.
        if self.in_flight.swap(true, Ordering::AcqRel) {
            debug!("Sync request dropped: another sync is in flight");
            return RequestOutcome::Dropped(DropReason::AlreadySyncing);
        }

        self.set_status(SyncStatus::Syncing);
        info!("Sync pass started");

        let success = match target {
            SyncTarget::All => match self.pull_all().await {
                Ok(()) => true,
                Err(err) => {
                    warn!(error = format!("{err:#}"), "Full pull failed");
                    false
                }
            },
            SyncTarget::Tasks => self.sync_tasks(mode).await,
            SyncTarget::Bookmarks => self.sync_bookmarks(mode).await,
        };

        // Release the critical section unconditionally; a failed attempt
        // must never wedge future syncs.
        self.in_flight.store(false, Ordering::Release);

        if success {
            info!("Sync pass succeeded");
            self.set_status(SyncStatus::Success);
            self.schedule_status_revert();
            RequestOutcome::Synced
        } else {
            self.set_status(SyncStatus::Error);
            RequestOutcome::Failed
        }
    }

    // ========================================================================
    // Status handling
    // ========================================================================

    fn set_status(&self, status: SyncStatus) {
        let mut cell = self.status.lock().unwrap();
        cell.status = status;
        cell.epoch += 1;
    }

    /// Schedules the `Success -> Idle` revert after the display window
    ///
    /// The timer captures the current status epoch; any fresh transition
    /// before it fires bumps the epoch and the revert becomes a no-op.
    fn schedule_status_revert(&self) {
        let cell = Arc::clone(&self.status);
        let armed_epoch = cell.lock().unwrap().epoch;
        let delay = self.settings.status_revert();

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut cell = cell.lock().unwrap();
            if cell.epoch == armed_epoch && cell.status == SyncStatus::Success {
                cell.status = SyncStatus::Idle;
                cell.epoch += 1;
            }
        });
    }

    // ========================================================================
    // Full pull (target: All)
    // ========================================================================

    /// One combined pull, every domain applied independently
    ///
    /// Errors propagate: any failure aborts the attempt and the caller maps
    /// it to `Error`. Domains applied before the failure stay applied; the
    /// next successful pull repairs the skew (store writes are not
    /// transactional).
    async fn pull_all(&self) -> anyhow::Result<()> {
        let snapshot = self
            .remote
            .fetch_snapshot()
            .await
            .context("Combined pull request failed")?;

        debug!(
            tasks = snapshot.tasks.len(),
            bookmarks = snapshot.bookmarks.len(),
            "Combined pull returned"
        );

        let tasks = TaskReconciler.from_wire(&snapshot.tasks);
        self.save(StoreKey::Tasks, &tasks).await?;
        self.bus.publish(DomainEvent::TasksChanged(tasks));

        let bookmarks = BookmarkReconciler.from_wire(&snapshot.bookmarks);
        self.save(StoreKey::Bookmarks, &bookmarks).await?;
        self.bus.publish(DomainEvent::BookmarksChanged(bookmarks));

        if let Some(wallpaper) = snapshot.wallpaper {
            self.apply_wallpaper(wallpaper).await?;
        }
        if let Some(theme) = snapshot.theme {
            self.apply_theme(theme).await?;
        }
        if let Some(title) = snapshot.browser_title {
            self.apply_browser_title(title).await?;
        }

        Ok(())
    }

    /// Applies a pulled wallpaper unless it matches the stored one or the
    /// stored one is a user-supplied custom image (custom always wins
    /// locally; a pull never overwrites it)
    async fn apply_wallpaper(&self, fetched: WallpaperDescriptor) -> anyhow::Result<()> {
        let stored: Option<WallpaperDescriptor> = self.load(StoreKey::Wallpaper).await?;

        if let Some(current) = &stored {
            if current.is_custom() {
                debug!("Keeping custom wallpaper, ignoring pulled descriptor");
                return Ok(());
            }
            if !current.differs_from(&fetched) {
                return Ok(());
            }
        }

        self.save(StoreKey::Wallpaper, &fetched).await?;
        self.bus.publish(DomainEvent::WallpaperChanged(fetched));
        Ok(())
    }

    /// Applies a pulled theme only when it differs from the stored value
    async fn apply_theme(&self, fetched: String) -> anyhow::Result<()> {
        let stored: Option<String> = self.load(StoreKey::Theme).await?;
        if stored.as_deref() == Some(fetched.as_str()) {
            return Ok(());
        }
        self.save(StoreKey::Theme, &fetched).await?;
        self.bus.publish(DomainEvent::ThemeChanged(fetched));
        Ok(())
    }

    /// Applies a pulled browser-title cosmetic when the stored value is
    /// absent or differs in id, template, or name
    async fn apply_browser_title(&self, fetched: BrowserTitleDescriptor) -> anyhow::Result<()> {
        let stored: Option<BrowserTitleDescriptor> = self.load(StoreKey::BrowserTitle).await?;
        if let Some(current) = &stored {
            if !current.differs_from(&fetched) {
                return Ok(());
            }
        }
        self.save(StoreKey::BrowserTitle, &fetched).await?;
        self.bus.publish(DomainEvent::BrowserTitleChanged(fetched));
        Ok(())
    }

    // ========================================================================
    // Per-domain sync (targets: Tasks, Bookmarks)
    // ========================================================================

    /// Task push/pull; all errors are caught at this boundary
    async fn sync_tasks(&self, mode: SyncMode) -> bool {
        match self.sync_tasks_inner(mode).await {
            Ok(()) => true,
            Err(err) => {
                warn!(error = format!("{err:#}"), "Task sync failed");
                false
            }
        }
    }

    async fn sync_tasks_inner(&self, mode: SyncMode) -> anyhow::Result<()> {
        let response = match mode {
            SyncMode::Pull => self
                .remote
                .fetch_tasks()
                .await
                .context("Task pull request failed")?,
            SyncMode::PushThenPull => {
                let local: Vec<Task> = self.load_list(StoreKey::Tasks).await?;
                let deleted: Vec<Task> = self.load_list(StoreKey::DeletedTasks).await?;
                let payload = TaskReconciler.to_wire(&local);
                let deletions = TaskReconciler.deletion_payload(&deleted);
                debug!(
                    pushed = payload.len(),
                    deletions = deletions.len(),
                    "Pushing tasks"
                );
                self.remote
                    .push_tasks(&payload, &deletions)
                    .await
                    .context("Task push request failed")?
            }
        };

        let merged = TaskReconciler.from_wire(&response);
        self.save(StoreKey::Tasks, &merged).await?;

        if mode == SyncMode::PushThenPull {
            // The server confirmed the push, so every pending deletion has
            // been applied remotely. Only now may the tombstones go.
            self.save(StoreKey::DeletedTasks, &Vec::<Task>::new())
                .await?;
        }

        self.bus.publish(DomainEvent::TasksChanged(merged));
        Ok(())
    }

    /// Bookmark push/pull; same shape as tasks, same error boundary
    async fn sync_bookmarks(&self, mode: SyncMode) -> bool {
        match self.sync_bookmarks_inner(mode).await {
            Ok(()) => true,
            Err(err) => {
                warn!(error = format!("{err:#}"), "Bookmark sync failed");
                false
            }
        }
    }

    async fn sync_bookmarks_inner(&self, mode: SyncMode) -> anyhow::Result<()> {
        let response = match mode {
            SyncMode::Pull => self
                .remote
                .fetch_bookmarks()
                .await
                .context("Bookmark pull request failed")?,
            SyncMode::PushThenPull => {
                let local: Vec<Bookmark> = self.load_list(StoreKey::Bookmarks).await?;
                let payload = BookmarkReconciler.to_wire(&local);
                // Bookmarks keep no tombstone list: a push carries the full
                // tree and the server treats it as a replacement, so the
                // deletion side list is always empty here.
                let deletions: Vec<_> = BookmarkReconciler.deletion_payload(&[]);
                debug!(pushed = payload.len(), "Pushing bookmarks");
                self.remote
                    .push_bookmarks(&payload, &deletions)
                    .await
                    .context("Bookmark push request failed")?
            }
        };

        let merged = BookmarkReconciler.from_wire(&response);
        self.save(StoreKey::Bookmarks, &merged).await?;
        self.bus.publish(DomainEvent::BookmarksChanged(merged));
        Ok(())
    }

    // ========================================================================
    // Store helpers
    // ========================================================================

    /// Reads and deserializes a list slot; an empty slot is an empty list
    async fn load_list<T: DeserializeOwned>(&self, key: StoreKey) -> anyhow::Result<Vec<T>> {
        match self.store.get(key).await? {
            Some(value) => serde_json::from_value(value)
                .with_context(|| format!("Stored value under '{key}' has an unexpected shape")),
            None => Ok(Vec::new()),
        }
    }

    /// Reads and deserializes a scalar slot
    async fn load<T: DeserializeOwned>(&self, key: StoreKey) -> anyhow::Result<Option<T>> {
        match self.store.get(key).await? {
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .with_context(|| format!("Stored value under '{key}' has an unexpected shape")),
            None => Ok(None),
        }
    }

    /// Serializes and writes a slot
    async fn save<T: Serialize>(&self, key: StoreKey, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_value(value)
            .with_context(|| format!("Failed to serialize value for '{key}'"))?;
        self.store.set(key, json).await
    }
}
