//! Refresh outcomes.
//!
//! A refused refresh is an expected business outcome rather than a fault,
//! so it is modelled as its own value type carrying a client-facing message.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// A newly minted token produced by a successful refresh
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshedToken {
    pub token: String,
    pub jti: String,
    pub expires_at: DateTime<Utc>,
}

/// Reason a refresh was refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RefreshRejection {
    #[error("Token has been revoked")]
    Revoked,

    #[error("Token could not be read: {reason}")]
    Malformed { reason: String },

    #[error("Token is missing orig_iat, the original issuance time")]
    MissingOrigIat,

    #[error("Token orig_iat has an invalid time format")]
    InvalidTimeFormat,

    #[error("The token can no longer be refreshed, the allowed period has been exceeded")]
    WindowExceeded,

    #[error("Token signature, issuer or audience could not be verified")]
    InvalidSignature,

    #[error("Token has no expiration time")]
    MissingExpiration,

    #[error("Revocation state is unavailable")]
    StoreUnavailable,

    #[error("Refreshed token could not be signed")]
    SigningFailed,
}

impl RefreshRejection {
    /// Human-readable reason suitable for the client
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Stable machine-readable reason code
    pub fn code(&self) -> &'static str {
        match self {
            RefreshRejection::Revoked => "revoked",
            RefreshRejection::Malformed { .. } => "malformed",
            RefreshRejection::MissingOrigIat => "missing_orig_iat",
            RefreshRejection::InvalidTimeFormat => "invalid_time_format",
            RefreshRejection::WindowExceeded => "refresh_window_exceeded",
            RefreshRejection::InvalidSignature => "invalid_signature",
            RefreshRejection::MissingExpiration => "missing_expiration",
            RefreshRejection::StoreUnavailable => "store_unavailable",
            RefreshRejection::SigningFailed => "signing_failed",
        }
    }

    /// Whether the rejection stems from a server-side failure rather than the token
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            RefreshRejection::StoreUnavailable | RefreshRejection::SigningFailed
        )
    }
}
