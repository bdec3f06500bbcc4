//! Request guard tests
//!
//! The coordinator evaluates four guards in a fixed order: rate, auth,
//! feature flag, mutual exclusion. Each test isolates one guard; the last
//! test pins the evaluation order itself.

use std::sync::Arc;
use std::time::Duration;

use startdeck_core::domain::{SyncMode, SyncStatus, SyncTarget};
use startdeck_sync::{DropReason, RequestOutcome};

use crate::common::{self, Harness};

#[tokio::test]
async fn test_second_request_inside_throttle_window_is_dropped() {
    let mut settings = common::fast_settings();
    settings.throttle_ms = 500;
    let h = Harness::new(settings);

    let first = h
        .coordinator
        .request(SyncTarget::Tasks, SyncMode::PushThenPull)
        .await;
    tokio::time::sleep(Duration::from_millis(10)).await;
    let second = h
        .coordinator
        .request(SyncTarget::Tasks, SyncMode::PushThenPull)
        .await;

    assert_eq!(first, RequestOutcome::Synced);
    assert_eq!(second, RequestOutcome::Dropped(DropReason::Throttled));
    assert_eq!(h.remote.calls(), 1, "dropped call must not reach the network");
}

#[tokio::test]
async fn test_request_outside_throttle_window_is_accepted() {
    let mut settings = common::fast_settings();
    settings.throttle_ms = 20;
    let h = Harness::new(settings);

    h.coordinator
        .request(SyncTarget::Tasks, SyncMode::Pull)
        .await;
    tokio::time::sleep(Duration::from_millis(50)).await;
    let second = h
        .coordinator
        .request(SyncTarget::Tasks, SyncMode::Pull)
        .await;

    assert_eq!(second, RequestOutcome::Synced);
    assert_eq!(h.remote.calls(), 2);
}

#[tokio::test]
async fn test_unauthenticated_request_is_dropped_silently() {
    let h = Harness::new(common::fast_settings());
    h.auth.set_authenticated(false);

    let outcome = h
        .coordinator
        .request(SyncTarget::All, SyncMode::Pull)
        .await;

    assert_eq!(outcome, RequestOutcome::Dropped(DropReason::Unauthenticated));
    assert_eq!(h.coordinator.status(), SyncStatus::Idle);
    assert_eq!(h.remote.calls(), 0);
}

#[tokio::test]
async fn test_disabled_sync_drops_every_request() {
    let mut settings = common::fast_settings();
    settings.enabled = false;
    let h = Harness::new(settings);

    let outcome = h
        .coordinator
        .request(SyncTarget::Bookmarks, SyncMode::Pull)
        .await;

    assert_eq!(outcome, RequestOutcome::Dropped(DropReason::Disabled));
    assert_eq!(h.remote.calls(), 0);
}

#[tokio::test]
async fn test_overlapping_requests_run_exactly_one_body() {
    let h = Harness::new(common::fast_settings());
    // Hold the first body open long enough for the second to arrive.
    h.remote.set_delay(Duration::from_millis(80));

    let c1 = Arc::clone(&h.coordinator);
    let c2 = Arc::clone(&h.coordinator);
    let first = tokio::spawn(async move { c1.request(SyncTarget::Tasks, SyncMode::Pull).await });
    tokio::time::sleep(Duration::from_millis(20)).await;
    let second = tokio::spawn(async move { c2.request(SyncTarget::Bookmarks, SyncMode::Pull).await });

    let first = first.await.unwrap();
    let second = second.await.unwrap();

    assert_eq!(first, RequestOutcome::Synced);
    assert_eq!(second, RequestOutcome::Dropped(DropReason::AlreadySyncing));
    assert_eq!(h.remote.calls(), 1, "the flag guards all targets globally");
}

#[tokio::test]
async fn test_in_flight_flag_released_after_failure() {
    let h = Harness::new(common::fast_settings());
    h.remote.set_fail(true);

    let failed = h
        .coordinator
        .request(SyncTarget::Tasks, SyncMode::Pull)
        .await;
    assert_eq!(failed, RequestOutcome::Failed);

    // A later request must not see a wedged flag.
    h.remote.set_fail(false);
    let retried = h
        .coordinator
        .request(SyncTarget::Tasks, SyncMode::Pull)
        .await;
    assert_eq!(retried, RequestOutcome::Synced);
}

#[tokio::test]
async fn test_rate_guard_runs_before_auth_guard() {
    // Leading edge: the first call records its timestamp even though the
    // auth guard then drops it, so an immediate retry is throttled, not
    // re-examined for auth.
    let mut settings = common::fast_settings();
    settings.throttle_ms = 500;
    let h = Harness::new(settings);
    h.auth.set_authenticated(false);

    let first = h
        .coordinator
        .request(SyncTarget::All, SyncMode::Pull)
        .await;
    let second = h
        .coordinator
        .request(SyncTarget::All, SyncMode::Pull)
        .await;

    assert_eq!(first, RequestOutcome::Dropped(DropReason::Unauthenticated));
    assert_eq!(second, RequestOutcome::Dropped(DropReason::Throttled));
}
