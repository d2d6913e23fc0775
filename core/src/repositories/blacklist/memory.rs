//! Process-local blacklist backed by a concurrent hash map.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

use crate::domain::entities::token::token_fingerprint;
use crate::errors::DomainError;
use crate::services::clock::{Clock, SystemClock};

use super::trait_::BlacklistStore;

/// In-memory blacklist shared by every request handler of one process
pub struct InMemoryBlacklistStore {
    entries: DashMap<String, DateTime<Utc>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryBlacklistStore {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::new(),
            clock,
        }
    }

    /// Expiry recorded for `token`, if it is blacklisted
    pub fn expiry_of(&self, token: &str) -> Option<DateTime<Utc>> {
        self.entries.get(token).map(|entry| *entry.value())
    }
}

impl Default for InMemoryBlacklistStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlacklistStore for InMemoryBlacklistStore {
    async fn add(&self, token: &str, expires_at: DateTime<Utc>) -> Result<bool, DomainError> {
        match self.entries.entry(token.to_string()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(expires_at);
                debug!(
                    "Blacklisted token {}... until {}",
                    token_fingerprint(token),
                    expires_at
                );
                Ok(true)
            }
        }
    }

    async fn contains(&self, token: &str) -> Result<bool, DomainError> {
        Ok(self.entries.contains_key(token))
    }

    async fn sweep(&self) -> Result<usize, DomainError> {
        let now = self.clock.now();
        let mut removed = 0;
        self.entries.retain(|_, expires_at| {
            let keep = *expires_at >= now;
            if !keep {
                removed += 1;
            }
            keep
        });
        Ok(removed)
    }

    async fn len(&self) -> Result<usize, DomainError> {
        Ok(self.entries.len())
    }
}
