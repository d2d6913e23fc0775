//! Token service module for JWT management
//!
//! This module handles all token-related operations including:
//! - Token issuance and HS256 signing
//! - Verification against the blacklist, signature and expiry
//! - Sliding refresh bounded by the original issuance time
//! - Revocation and periodic blacklist sweeping

mod cleanup;
mod codec;
mod config;
mod service;

#[cfg(test)]
mod tests;

pub use cleanup::{BlacklistSweeper, BlacklistSweeperConfig, SweepReport};
pub use codec::{decode_unverified, TokenCodec};
pub use config::TokenServiceConfig;
pub use service::TokenService;
