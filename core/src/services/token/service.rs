//! Main token service implementation

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::domain::entities::token::{token_fingerprint, Claims, OrigIatError};
use crate::domain::entities::user::User;
use crate::domain::value_objects::{RefreshRejection, RefreshedToken, ValidationResult};
use crate::errors::{DomainError, TokenError};
use crate::repositories::BlacklistStore;
use crate::services::clock::{Clock, SystemClock};

use super::codec::{decode_unverified, TokenCodec};
use super::config::TokenServiceConfig;

/// Issues, validates, refreshes and revokes session tokens.
///
/// The blacklist is shared with every other holder of the same `Arc`, so a
/// token revoked through one handler is rejected by all of them.
pub struct TokenService<B: BlacklistStore> {
    pub(crate) blacklist: Arc<B>,
    codec: TokenCodec,
    config: TokenServiceConfig,
    clock: Arc<dyn Clock>,
}

impl<B: BlacklistStore> TokenService<B> {
    /// Creates a new token service instance using wall-clock time
    ///
    /// # Errors
    /// `TokenError::Configuration` when no signing secret is configured
    pub fn new(blacklist: Arc<B>, config: TokenServiceConfig) -> Result<Self, DomainError> {
        Self::with_clock(blacklist, config, Arc::new(SystemClock))
    }

    /// Creates a new token service instance reading time from `clock`
    pub fn with_clock(
        blacklist: Arc<B>,
        config: TokenServiceConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, DomainError> {
        let codec = TokenCodec::new(
            &config.jwt_secret,
            config.issuer.clone(),
            config.audience.clone(),
            clock.clone(),
        )?;

        Ok(Self {
            blacklist,
            codec,
            config,
            clock,
        })
    }

    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    pub fn config(&self) -> &TokenServiceConfig {
        &self.config
    }

    pub fn blacklist(&self) -> &Arc<B> {
        &self.blacklist
    }

    /// Issues a token for `user` that starts a new session
    pub fn issue(&self, user: &User) -> Result<String, DomainError> {
        self.issue_for(&user.subject(), user.email.as_str())
    }

    /// Issues a token for an arbitrary subject and email
    pub fn issue_for(&self, subject: &str, email: &str) -> Result<String, DomainError> {
        let token = self
            .codec
            .issue(subject, email, self.config.expiration, None)?;
        info!("Issued token for subject {}", subject);
        Ok(token)
    }

    /// Checks a token against the blacklist and then fully verifies it
    ///
    /// # Returns
    /// * `Ok(Claims)` - The token is live
    /// * `Err(TokenError::Revoked)` - The token was blacklisted
    /// * `Err(TokenError::*)` - Verification failed
    pub async fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        match self.blacklist.contains(token).await {
            Ok(true) => return Err(TokenError::Revoked.into()),
            Ok(false) => {}
            Err(e) => {
                error!("Blacklist lookup failed: {}", e);
                return Err(e);
            }
        }
        Ok(self.codec.verify(token)?)
    }

    /// Whether `token` is currently acceptable
    pub async fn validate(&self, token: &str) -> bool {
        self.validate_with_subject(token).await.is_valid()
    }

    /// Like [`validate`](Self::validate), also returning the `sub` claim
    pub async fn validate_with_subject(&self, token: &str) -> ValidationResult {
        match self.verify(token).await {
            Ok(claims) => ValidationResult::valid(claims.sub),
            Err(e) => {
                debug!(
                    "Token {}... failed validation: {}",
                    token_fingerprint(token),
                    e
                );
                ValidationResult::invalid()
            }
        }
    }

    /// Exchanges `old_token` for a new token within the same session.
    ///
    /// The new token keeps every claim of the old one except `jti`, which is
    /// regenerated, and `exp`, which becomes the old expiry plus the refresh
    /// extension. An expired token may still be refreshed as long as the
    /// session started no more than the refresh window ago. The old token is
    /// blacklisted until its own expiry before the new one is signed, so of
    /// several concurrent refreshes of the same token exactly one succeeds.
    pub async fn refresh(&self, old_token: &str) -> Result<RefreshedToken, RefreshRejection> {
        let fingerprint = token_fingerprint(old_token);

        match self.blacklist.contains(old_token).await {
            Ok(true) => {
                warn!("Refresh attempted with revoked token {}...", fingerprint);
                return Err(RefreshRejection::Revoked);
            }
            Ok(false) => {}
            Err(e) => {
                error!("Blacklist lookup failed during refresh: {}", e);
                return Err(RefreshRejection::StoreUnavailable);
            }
        }

        let mut claims = decode_unverified(old_token).map_err(|e| RefreshRejection::Malformed {
            reason: e.to_string(),
        })?;

        let orig_iat = claims.orig_iat().map_err(|e| match e {
            OrigIatError::Missing => RefreshRejection::MissingOrigIat,
            OrigIatError::InvalidFormat => RefreshRejection::InvalidTimeFormat,
        })?;

        let session_age = self.clock.now() - orig_iat;
        if session_age > self.config.refresh_window {
            info!(
                "Refresh refused for token {}..., session age {}s exceeds window",
                fingerprint,
                session_age.num_seconds()
            );
            return Err(RefreshRejection::WindowExceeded);
        }

        let old_expiry = claims
            .expires_at()
            .ok_or(RefreshRejection::MissingExpiration)?;

        if let Err(e) = self.codec.verify_provenance(old_token) {
            warn!("Refresh attempted with unverifiable token {}...: {}", fingerprint, e);
            return Err(RefreshRejection::InvalidSignature);
        }

        // Only the caller whose insert lands first may rotate the token.
        match self.blacklist.add(old_token, old_expiry).await {
            Ok(true) => {}
            Ok(false) => {
                warn!("Concurrent refresh lost the claim on token {}...", fingerprint);
                return Err(RefreshRejection::Revoked);
            }
            Err(e) => {
                error!("Failed to blacklist refreshed token {}...: {}", fingerprint, e);
                return Err(RefreshRejection::StoreUnavailable);
            }
        }

        let new_expiry = old_expiry + self.config.refresh_extension;

        let jti = claims.rotate_jti();
        claims.set_expires_at(new_expiry);
        let token = self
            .codec
            .sign_raw(&claims)
            .map_err(|_| RefreshRejection::SigningFailed)?;

        info!(
            "Refreshed token {}... for subject {}",
            fingerprint,
            claims.subject().unwrap_or("<none>")
        );

        Ok(RefreshedToken {
            token,
            jti,
            expires_at: new_expiry,
        })
    }

    /// Blacklists `token` until its own expiry.
    ///
    /// # Returns
    /// * `true` - The token is now (or already was) blacklisted
    /// * `false` - The token could not be parsed, has no expiry, or the store failed
    pub async fn revoke(&self, token: &str) -> bool {
        let fingerprint = token_fingerprint(token);

        let claims = match decode_unverified(token) {
            Ok(claims) => claims,
            Err(e) => {
                warn!("Cannot revoke unparsable token {}...: {}", fingerprint, e);
                return false;
            }
        };

        let Some(expires_at) = claims.expires_at() else {
            warn!("Cannot revoke token {}... without expiry", fingerprint);
            return false;
        };

        match self.blacklist.contains(token).await {
            Ok(true) => {
                debug!("Token {}... already revoked", fingerprint);
                return true;
            }
            Ok(false) => {}
            Err(e) => {
                error!("Blacklist lookup failed during revoke: {}", e);
                return false;
            }
        }

        match self.blacklist.add(token, expires_at).await {
            Ok(_) => {
                info!("Revoked token {}...", fingerprint);
                true
            }
            Err(e) => {
                error!("Failed to revoke token {}...: {}", fingerprint, e);
                false
            }
        }
    }

    /// Drops blacklist entries whose tokens have expired
    pub async fn sweep_blacklist(&self) -> Result<usize, DomainError> {
        self.blacklist.sweep().await
    }
}
