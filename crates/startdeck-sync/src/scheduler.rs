//! Sync scheduling - the one-shot initial pull and external triggers
//!
//! Two small pieces sit in front of the [`SyncCoordinator`]:
//!
//! - [`InitialSyncScheduler`] performs exactly one full pull per
//!   authenticated session, a short delay after authentication and the
//!   sync-enabled flag are both confirmed. It is a one-shot latch keyed on
//!   the auth session epoch: re-evaluation (re-render, settings reload)
//!   never re-fires it; only a fresh login re-arms it.
//! - [`TriggerListener`] consumes externally dispatched [`SyncTrigger`]s
//!   from an mpsc channel - UI actions, periodic timers - and forwards them
//!   while authenticated. This is how arbitrary UI code requests a sync
//!   without depending on the coordinator directly.
//!
//! ## Flow
//!
//! ```text
//! UI / timers ──→ mpsc::Sender<SyncTrigger> ──→ TriggerListener ──→ SyncCoordinator
//! auth signal ──→ InitialSyncScheduler (once per session) ──┘
//! ```

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, info};

use startdeck_core::config::SyncSettings;
use startdeck_core::domain::{SyncMode, SyncTarget};
use startdeck_core::ports::IAuthContext;

use crate::coordinator::SyncCoordinator;

// ============================================================================
// InitialSyncScheduler
// ============================================================================

/// One-shot trigger for the post-login full pull
pub struct InitialSyncScheduler {
    coordinator: Arc<SyncCoordinator>,
    auth: Arc<dyn IAuthContext>,
    /// Sync feature flag, captured from settings
    enabled: bool,
    /// Delay between confirmation and the pull
    delay: Duration,
    /// Session epoch this latch already fired for, if any
    fired_for_epoch: Mutex<Option<u64>>,
}

impl InitialSyncScheduler {
    /// Creates the scheduler; nothing fires until [`evaluate`] is called
    ///
    /// [`evaluate`]: InitialSyncScheduler::evaluate
    pub fn new(
        coordinator: Arc<SyncCoordinator>,
        auth: Arc<dyn IAuthContext>,
        settings: &SyncSettings,
    ) -> Self {
        Self {
            coordinator,
            auth,
            enabled: settings.enabled,
            delay: settings.initial_sync_delay(),
            fired_for_epoch: Mutex::new(None),
        }
    }

    /// Re-evaluates the trigger conditions
    ///
    /// Safe to call any number of times (the surrounding application calls
    /// this on every re-render and settings reload). Fires at most once per
    /// authenticated session: the latch records the session epoch before
    /// the delayed pull is spawned, so a second evaluation in the same
    /// session is a no-op even while the timer is still pending.
    pub fn evaluate(&self) {
        if !self.enabled || !self.auth.is_authenticated() {
            return;
        }

        let epoch = self.auth.session_epoch();
        {
            let mut fired = self.fired_for_epoch.lock().unwrap();
            if *fired == Some(epoch) {
                debug!(epoch, "Initial sync already fired for this session");
                return;
            }
            *fired = Some(epoch);
        }

        info!(
            epoch,
            delay_ms = self.delay.as_millis() as u64,
            "Scheduling initial full pull"
        );

        let coordinator = Arc::clone(&self.coordinator);
        let delay = self.delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            coordinator.request(SyncTarget::All, SyncMode::Pull).await;
        });
    }
}

// ============================================================================
// TriggerListener
// ============================================================================

/// An externally dispatched request for a sync pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncTrigger {
    pub target: SyncTarget,
    pub mode: SyncMode,
}

/// Forwards external trigger signals to the coordinator
///
/// Triggers arriving while unauthenticated are dropped, not held. The loop
/// terminates when every sender has been dropped.
pub struct TriggerListener {
    trigger_rx: mpsc::Receiver<SyncTrigger>,
    coordinator: Arc<SyncCoordinator>,
    auth: Arc<dyn IAuthContext>,
}

impl TriggerListener {
    /// Creates a listener and the sender half UI code dispatches through
    pub fn new(
        coordinator: Arc<SyncCoordinator>,
        auth: Arc<dyn IAuthContext>,
        capacity: usize,
    ) -> (Self, mpsc::Sender<SyncTrigger>) {
        let (tx, rx) = mpsc::channel(capacity);
        let listener = Self {
            trigger_rx: rx,
            coordinator,
            auth,
        };
        (listener, tx)
    }

    /// Main loop: receive, filter on auth, forward
    pub async fn run(&mut self) {
        info!("Sync trigger listener starting");

        while let Some(trigger) = self.trigger_rx.recv().await {
            if !self.auth.is_authenticated() {
                debug!(?trigger, "Dropping trigger: not authenticated");
                continue;
            }

            let outcome = self
                .coordinator
                .request(trigger.target, trigger.mode)
                .await;
            debug!(?trigger, ?outcome, "Trigger handled");
        }

        info!("Trigger channel closed, listener shutting down");
    }
}
