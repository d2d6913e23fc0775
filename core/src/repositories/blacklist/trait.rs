//! Blacklist store trait: the set of revoked tokens.
//!
//! Entries are keyed by the raw token string and remember the token's own
//! expiry, after which the entry is safe to drop because the token would be
//! rejected as expired anyway.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::DomainError;

#[async_trait]
pub trait BlacklistStore: Send + Sync {
    /// Record `token` as revoked until `expires_at`
    ///
    /// # Returns
    /// * `Ok(true)` - The token was newly added
    /// * `Ok(false)` - The token was already present; the stored expiry is kept
    async fn add(&self, token: &str, expires_at: DateTime<Utc>) -> Result<bool, DomainError>;

    /// Check whether `token` has been revoked
    async fn contains(&self, token: &str) -> Result<bool, DomainError>;

    /// Remove every entry whose expiry is strictly before now
    ///
    /// # Returns
    /// The number of removed entries
    async fn sweep(&self) -> Result<usize, DomainError>;

    /// Number of entries currently held
    async fn len(&self) -> Result<usize, DomainError>;

    async fn is_empty(&self) -> Result<bool, DomainError> {
        Ok(self.len().await? == 0)
    }
}
