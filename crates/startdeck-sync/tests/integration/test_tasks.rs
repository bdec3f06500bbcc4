//! Task sync flow tests
//!
//! Covers tombstone handling across the failure boundary and the identity
//! merge as seen end to end through the coordinator.

use serde_json::json;

use startdeck_core::domain::{SyncMode, SyncTarget, Task};
use startdeck_core::ports::StoreKey;
use startdeck_sync::RequestOutcome;

use crate::common::{self, Harness};

fn stored_tasks(h: &Harness) -> Vec<Task> {
    serde_json::from_value(h.store.peek(StoreKey::Tasks).unwrap()).unwrap()
}

#[tokio::test]
async fn test_push_carries_pending_tombstones() {
    let h = Harness::new(common::fast_settings());
    let live = common::unsynced_task("t1", "buy milk");
    let dead = common::unsynced_task("t2", "old chore");
    h.store
        .preload(StoreKey::Tasks, serde_json::to_value(vec![&live]).unwrap());
    h.store
        .preload(StoreKey::DeletedTasks, serde_json::to_value(vec![&dead]).unwrap());

    h.coordinator
        .request(SyncTarget::Tasks, SyncMode::PushThenPull)
        .await;

    let pushes = h.remote.pushed_tasks();
    assert_eq!(pushes.len(), 1);
    let (tasks, deleted) = &pushes[0];
    assert_eq!(tasks[0].offline_id.as_deref(), Some("t1"));
    assert_eq!(deleted[0].offline_id.as_deref(), Some("t2"));
}

#[tokio::test]
async fn test_tombstones_cleared_only_after_confirmed_push() {
    let h = Harness::new(common::fast_settings());
    let dead = common::unsynced_task("t2", "old chore");
    h.store
        .preload(StoreKey::DeletedTasks, serde_json::to_value(vec![&dead]).unwrap());

    h.coordinator
        .request(SyncTarget::Tasks, SyncMode::PushThenPull)
        .await;

    assert_eq!(
        h.store.peek(StoreKey::DeletedTasks),
        Some(json!([])),
        "confirmed push empties the tombstone list"
    );
}

#[tokio::test]
async fn test_failed_push_keeps_tombstones_for_retry() {
    let mut settings = common::fast_settings();
    settings.throttle_ms = 0;
    let h = Harness::new(settings);
    h.remote.set_fail(true);

    let dead = common::unsynced_task("t2", "old chore");
    let tombstones = serde_json::to_value(vec![&dead]).unwrap();
    h.store.preload(StoreKey::DeletedTasks, tombstones.clone());

    let outcome = h
        .coordinator
        .request(SyncTarget::Tasks, SyncMode::PushThenPull)
        .await;
    assert_eq!(outcome, RequestOutcome::Failed);
    assert_eq!(
        h.store.peek(StoreKey::DeletedTasks),
        Some(tombstones.clone()),
        "unconfirmed deletions must survive the failed attempt"
    );

    // The retry then carries the same tombstones.
    h.remote.set_fail(false);
    h.coordinator
        .request(SyncTarget::Tasks, SyncMode::PushThenPull)
        .await;
    let pushes = h.remote.pushed_tasks();
    assert_eq!(pushes.last().unwrap().1[0].offline_id.as_deref(), Some("t2"));
}

#[tokio::test]
async fn test_pull_mode_never_clears_tombstones() {
    let h = Harness::new(common::fast_settings());
    let dead = common::unsynced_task("t2", "old chore");
    let tombstones = serde_json::to_value(vec![&dead]).unwrap();
    h.store.preload(StoreKey::DeletedTasks, tombstones.clone());

    h.coordinator
        .request(SyncTarget::Tasks, SyncMode::Pull)
        .await;

    assert_eq!(h.store.peek(StoreKey::DeletedTasks), Some(tombstones));
    assert!(h.remote.pushed_tasks().is_empty());
}

#[tokio::test]
async fn test_push_response_merges_server_id_onto_local_task() {
    let h = Harness::new(common::fast_settings());
    let local = common::unsynced_task("t1", "buy milk");
    h.store
        .preload(StoreKey::Tasks, serde_json::to_value(vec![&local]).unwrap());
    h.remote
        .set_task_response(vec![common::echoed_task("srv-9", "t1", "buy milk")]);

    let outcome = h
        .coordinator
        .request(SyncTarget::Tasks, SyncMode::PushThenPull)
        .await;
    assert_eq!(outcome, RequestOutcome::Synced);

    let merged = stored_tasks(&h);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].local_id.as_str(), "t1", "local identity survives");
    assert_eq!(
        merged[0].remote_id.as_ref().unwrap().as_str(),
        "srv-9",
        "server identity is adopted"
    );
    assert_eq!(h.published(), vec!["tasks:changed"]);
}

#[tokio::test]
async fn test_failed_sync_publishes_nothing() {
    let h = Harness::new(common::fast_settings());
    h.remote.set_fail(true);

    h.coordinator
        .request(SyncTarget::Tasks, SyncMode::Pull)
        .await;

    assert!(h.published().is_empty());
    assert!(h.store.peek(StoreKey::Tasks).is_none());
}
