//! Periodic maintenance of the token blacklist
//!
//! Blacklist entries are only needed until the revoked token would have
//! expired on its own; the sweeper drops them after that point so the
//! store does not grow without bound.

use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use ph_shared::config::BlacklistConfig;

use crate::errors::DomainError;
use crate::repositories::BlacklistStore;

/// Configuration for the blacklist sweeper
#[derive(Debug, Clone)]
pub struct BlacklistSweeperConfig {
    /// How often to run a sweep (in seconds)
    pub interval_seconds: u64,
    /// Whether to enable automatic sweeping
    pub enabled: bool,
}

impl Default for BlacklistSweeperConfig {
    fn default() -> Self {
        Self::from(&BlacklistConfig::default())
    }
}

impl From<&BlacklistConfig> for BlacklistSweeperConfig {
    fn from(config: &BlacklistConfig) -> Self {
        Self {
            interval_seconds: config.sweep_interval_secs,
            enabled: config.sweep_enabled,
        }
    }
}

/// Service removing expired entries from a blacklist store
pub struct BlacklistSweeper<B: BlacklistStore + 'static> {
    blacklist: Arc<B>,
    config: BlacklistSweeperConfig,
}

impl<B: BlacklistStore> BlacklistSweeper<B> {
    /// Create a new sweeper over a shared blacklist
    pub fn new(blacklist: Arc<B>, config: BlacklistSweeperConfig) -> Self {
        Self { blacklist, config }
    }

    /// Run a single sweep cycle
    ///
    /// # Returns
    /// * `Ok(SweepReport)` - Summary of the sweep
    /// * `Err(DomainError)` - If the store failed
    pub async fn run_sweep(&self) -> Result<SweepReport, DomainError> {
        let removed = self.blacklist.sweep().await?;
        let remaining = self.blacklist.len().await?;

        if removed > 0 {
            info!(
                "Blacklist sweep removed {} expired entries, {} remaining",
                removed, remaining
            );
        } else {
            debug!("Blacklist sweep found nothing to remove, {} entries", remaining);
        }

        Ok(SweepReport { removed, remaining })
    }

    /// Start the sweeper as a background task
    ///
    /// Returns `None` without spawning when sweeping is disabled or the
    /// interval is zero. Must be called from within a tokio runtime.
    pub fn start_background_task(self: Arc<Self>) -> Option<JoinHandle<()>> {
        if !self.config.enabled {
            warn!("Blacklist sweeper is disabled");
            return None;
        }
        if self.config.interval_seconds == 0 {
            warn!("Blacklist sweeper interval is zero, not starting");
            return None;
        }

        let interval = std::time::Duration::from_secs(self.config.interval_seconds);

        Some(tokio::spawn(async move {
            info!(
                "Blacklist sweeper started - will run every {} seconds",
                self.config.interval_seconds
            );

            let mut interval_timer = tokio::time::interval(interval);
            // The first tick completes immediately
            interval_timer.tick().await;

            loop {
                interval_timer.tick().await;

                if let Err(e) = self.run_sweep().await {
                    error!("Blacklist sweep failed: {}", e);
                }
            }
        }))
    }
}

/// Result of a sweep
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweepReport {
    /// Number of expired entries removed
    pub removed: usize,
    /// Number of entries left in the store
    pub remaining: usize,
}
