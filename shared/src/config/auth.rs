//! Authentication configuration: JWT signing and blacklist maintenance

use serde::{Deserialize, Serialize};

use super::{env_or, ConfigError};

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Shared HMAC secret used to sign and verify tokens
    pub secret: String,

    /// JWT issuer claim
    #[serde(default = "default_issuer")]
    pub issuer: String,

    /// JWT audience claim
    #[serde(default = "default_audience")]
    pub audience: String,

    /// Lifetime of a freshly issued token, in minutes
    #[serde(default = "default_expiration_minutes")]
    pub expiration_minutes: i64,

    /// Hard ceiling on a login session measured from `orig_iat`, in hours
    #[serde(default = "default_refresh_window_hours")]
    pub refresh_window_hours: i64,

    /// How far a refresh pushes the expiry past the old token's expiry, in minutes
    #[serde(default = "default_refresh_extension_minutes")]
    pub refresh_extension_minutes: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            issuer: default_issuer(),
            audience: default_audience(),
            expiration_minutes: default_expiration_minutes(),
            refresh_window_hours: default_refresh_window_hours(),
            refresh_extension_minutes: default_refresh_extension_minutes(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set the token lifetime in minutes
    pub fn with_expiration_minutes(mut self, minutes: i64) -> Self {
        self.expiration_minutes = minutes;
        self
    }

    /// Set issuer and audience
    pub fn with_issuer_and_audience(
        mut self,
        issuer: impl Into<String>,
        audience: impl Into<String>,
    ) -> Self {
        self.issuer = issuer.into();
        self.audience = audience.into();
        self
    }

    /// Create from environment variables
    ///
    /// `JWT_SECRET` is read as-is; an absent variable leaves the secret
    /// empty so that `validate` reports it instead of silently signing
    /// with a development default.
    pub fn from_env() -> Self {
        Self {
            secret: std::env::var("JWT_SECRET").unwrap_or_default(),
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| default_issuer()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| default_audience()),
            expiration_minutes: env_or("JWT_EXPIRATION_MINUTES", default_expiration_minutes()),
            refresh_window_hours: env_or("JWT_REFRESH_WINDOW_HOURS", default_refresh_window_hours()),
            refresh_extension_minutes: env_or(
                "JWT_REFRESH_EXTENSION_MINUTES",
                default_refresh_extension_minutes(),
            ),
        }
    }

    /// Check the configuration is usable for signing tokens
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.trim().is_empty() {
            return Err(ConfigError::Missing {
                key: "JWT_SECRET".to_string(),
            });
        }
        if self.expiration_minutes <= 0 {
            return Err(ConfigError::Invalid {
                key: "JWT_EXPIRATION_MINUTES".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.refresh_window_hours <= 0 {
            return Err(ConfigError::Invalid {
                key: "JWT_REFRESH_WINDOW_HOURS".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.refresh_extension_minutes < 0 {
            return Err(ConfigError::Invalid {
                key: "JWT_REFRESH_EXTENSION_MINUTES".to_string(),
                reason: "must not be negative".to_string(),
            });
        }
        Ok(())
    }
}

/// Settings for the periodic sweep of expired blacklist entries
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BlacklistConfig {
    /// Whether the background sweeper is started
    #[serde(default = "default_sweep_enabled")]
    pub sweep_enabled: bool,

    /// Seconds between two sweeps
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_secs: u64,
}

impl Default for BlacklistConfig {
    fn default() -> Self {
        Self {
            sweep_enabled: default_sweep_enabled(),
            sweep_interval_secs: default_sweep_interval(),
        }
    }
}

impl BlacklistConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            sweep_enabled: env_or("BLACKLIST_SWEEP_ENABLED", default_sweep_enabled()),
            sweep_interval_secs: env_or("BLACKLIST_SWEEP_INTERVAL_SECS", default_sweep_interval()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sweep_enabled && self.sweep_interval_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "BLACKLIST_SWEEP_INTERVAL_SECS".to_string(),
                reason: "must be greater than zero when sweeping is enabled".to_string(),
            });
        }
        Ok(())
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Blacklist maintenance
    #[serde(default)]
    pub blacklist: BlacklistConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            jwt: JwtConfig::from_env(),
            blacklist: BlacklistConfig::from_env(),
        }
    }
}

fn default_issuer() -> String {
    String::from("pubhub-user-service")
}

fn default_audience() -> String {
    String::from("pubhub-clients")
}

fn default_expiration_minutes() -> i64 {
    60
}

fn default_refresh_window_hours() -> i64 {
    8
}

fn default_refresh_extension_minutes() -> i64 {
    1
}

fn default_sweep_enabled() -> bool {
    true
}

fn default_sweep_interval() -> u64 {
    300 // 5 minutes
}
