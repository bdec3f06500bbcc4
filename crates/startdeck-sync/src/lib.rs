//! Startdeck synchronization engine
//!
//! Reconciles two mutable replicas of the user's dashboard data - the local
//! device state and the remote canonical state - without a central
//! consistency protocol:
//!
//! - [`reconcile`] - pure translation between local entities and wire
//!   payloads, one reconciler per entity family
//! - [`coordinator`] - the stateful orchestrator: guards, dispatch, status
//!   ownership, event publication
//! - [`scheduler`] - the one-shot initial full pull and the external
//!   trigger listener
//!
//! The merge protocol is deliberately small: the server's response is the
//! new source of truth for field values, but the client chooses which local
//! identity each record keeps, so UI identity stays stable across merges.

pub mod coordinator;
pub mod reconcile;
pub mod scheduler;

pub use coordinator::{DropReason, RequestOutcome, SyncCoordinator};
pub use reconcile::{BookmarkReconciler, EntityReconciler, TaskReconciler};
pub use scheduler::{InitialSyncScheduler, SyncTrigger, TriggerListener};
