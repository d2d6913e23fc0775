//! Configuration for the token service

use chrono::Duration;
use ph_shared::config::JwtConfig;

use crate::domain::entities::token::{
    DEFAULT_EXPIRATION_MINUTES, REFRESH_EXTENSION_MINUTES, REFRESH_WINDOW_HOURS,
};

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// HMAC secret shared by signing and verification
    pub jwt_secret: String,
    /// Value of the `iss` claim
    pub issuer: String,
    /// Value of the `aud` claim
    pub audience: String,
    /// Lifetime of a freshly issued token
    pub expiration: Duration,
    /// Maximum age of a session, measured from `orig_iat`
    pub refresh_window: Duration,
    /// Added to the previous expiry on every refresh
    pub refresh_extension: Duration,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self::from(&JwtConfig::default())
    }
}

impl TokenServiceConfig {
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            ..Default::default()
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        let positive_or = |value: i64, default: i64| if value > 0 { value } else { default };
        Self {
            jwt_secret: config.secret.clone(),
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            expiration: Duration::minutes(positive_or(
                config.expiration_minutes,
                DEFAULT_EXPIRATION_MINUTES,
            )),
            refresh_window: Duration::hours(positive_or(
                config.refresh_window_hours,
                REFRESH_WINDOW_HOURS,
            )),
            refresh_extension: Duration::minutes(if config.refresh_extension_minutes >= 0 {
                config.refresh_extension_minutes
            } else {
                REFRESH_EXTENSION_MINUTES
            }),
        }
    }
}
