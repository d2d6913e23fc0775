//! Unit tests for the blacklist sweeper

use chrono::Duration;
use std::sync::Arc;

use crate::repositories::{BlacklistStore, InMemoryBlacklistStore};
use crate::services::clock::{Clock, ManualClock};
use crate::services::token::{BlacklistSweeper, BlacklistSweeperConfig, SweepReport};

const T0: i64 = 1_700_000_000;

fn setup(config: BlacklistSweeperConfig) -> (
    Arc<BlacklistSweeper<InMemoryBlacklistStore>>,
    Arc<InMemoryBlacklistStore>,
    Arc<ManualClock>,
) {
    let clock = Arc::new(ManualClock::at_timestamp(T0));
    let blacklist = Arc::new(InMemoryBlacklistStore::with_clock(clock.clone()));
    let sweeper = Arc::new(BlacklistSweeper::new(blacklist.clone(), config));
    (sweeper, blacklist, clock)
}

#[tokio::test]
async fn test_run_sweep_reports_removed_and_remaining() {
    let (sweeper, blacklist, clock) = setup(BlacklistSweeperConfig::default());
    let now = clock.now();
    blacklist.add("short-lived", now + Duration::minutes(5)).await.unwrap();
    blacklist.add("long-lived", now + Duration::hours(1)).await.unwrap();

    clock.advance(Duration::minutes(1));
    assert_eq!(
        sweeper.run_sweep().await.unwrap(),
        SweepReport { removed: 0, remaining: 2 }
    );

    clock.advance(Duration::minutes(5));
    assert_eq!(
        sweeper.run_sweep().await.unwrap(),
        SweepReport { removed: 1, remaining: 1 }
    );
    assert!(blacklist.contains("long-lived").await.unwrap());
}

#[tokio::test]
async fn test_disabled_sweeper_does_not_start() {
    let config = BlacklistSweeperConfig {
        interval_seconds: 60,
        enabled: false,
    };
    let (sweeper, _blacklist, _clock) = setup(config);
    assert!(sweeper.start_background_task().is_none());
}

#[tokio::test]
async fn test_zero_interval_does_not_start() {
    let config = BlacklistSweeperConfig {
        interval_seconds: 0,
        enabled: true,
    };
    let (sweeper, _blacklist, _clock) = setup(config);
    assert!(sweeper.start_background_task().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_background_task_sweeps_on_interval() {
    let config = BlacklistSweeperConfig {
        interval_seconds: 60,
        enabled: true,
    };
    let (sweeper, blacklist, clock) = setup(config);
    blacklist
        .add("revoked", clock.now() + Duration::minutes(1))
        .await
        .unwrap();
    clock.advance(Duration::minutes(2));

    let handle = sweeper.start_background_task().unwrap();
    assert_eq!(blacklist.len().await.unwrap(), 1);

    tokio::time::sleep(std::time::Duration::from_secs(61)).await;
    tokio::task::yield_now().await;

    assert!(blacklist.is_empty().await.unwrap());
    handle.abort();
}

#[test]
fn test_config_from_shared_settings() {
    let shared = ph_shared::config::BlacklistConfig {
        sweep_enabled: false,
        sweep_interval_secs: 42,
    };
    let config = BlacklistSweeperConfig::from(&shared);
    assert_eq!(config.interval_seconds, 42);
    assert!(!config.enabled);
}
