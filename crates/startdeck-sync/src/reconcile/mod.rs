//! Entity reconciliation
//!
//! Pure, side-effect-free translation between local entity collections and
//! wire payloads, one reconciler per entity family. These are total
//! functions over their inputs: malformed-but-structurally-valid input
//! (e.g. a bookmark whose parent is missing) passes through unchanged; this
//! layer never repairs trees and never performs I/O.
//!
//! ## The merge rule
//!
//! `from_wire` picks each record's local identity as `offline_id ?? id`:
//! prefer the local id we sent, so UI identity and local-only UI state
//! survive the round trip; fall back to the server id only for records the
//! server created that this device never had (synced from elsewhere).
//! `remote_id` always takes the server's `id`. Field values always come
//! from the server.

mod bookmarks;
mod tasks;

pub use bookmarks::BookmarkReconciler;
pub use tasks::TaskReconciler;

/// Translation between one entity family's local and wire representations
pub trait EntityReconciler {
    /// Local entity type
    type Local;
    /// Wire record type
    type Wire;

    /// Emits one wire record per local entity, `offline_id = local_id`,
    /// `id = remote_id` when known
    fn to_wire(&self, local: &[Self::Local]) -> Vec<Self::Wire>;

    /// Maps a wire response back into local entities per the merge rule
    fn from_wire(&self, wire: &[Self::Wire]) -> Vec<Self::Local>;

    /// Builds the side list the server uses to hard-delete remote records
    ///
    /// Identical shape to [`to_wire`](EntityReconciler::to_wire).
    fn deletion_payload(&self, deleted: &[Self::Local]) -> Vec<Self::Wire> {
        self.to_wire(deleted)
    }
}
