//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - JWT signing, refresh window and blacklist maintenance
//! - `environment` - Deployment stage from `ENVIRONMENT`
//! - `remote` - Delegated token validation against a remote authority
//! - `server` - HTTP server and CORS configuration

pub mod auth;
pub mod environment;
pub mod remote;
pub mod server;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export commonly used types
pub use auth::{AuthConfig, BlacklistConfig, JwtConfig};
pub use environment::Environment;
pub use remote::RemoteValidationConfig;
pub use server::{CorsConfig, ServerConfig};

/// Errors raised while loading or validating configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required configuration: {key}")]
    Missing { key: String },

    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: String, reason: String },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Remote token validation (publication service)
    #[serde(default)]
    pub remote_validation: RemoteValidationConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// `default_port` is used when `SERVER_PORT` is not set, so each
    /// service binary can keep its own conventional port.
    pub fn from_env(default_port: u16) -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(default_port),
            auth: AuthConfig::from_env(),
            remote_validation: RemoteValidationConfig::from_env(),
            cors: CorsConfig::from_env(environment),
        }
    }

    /// Validate the settings the token issuing service cannot run without
    pub fn validate_for_issuer(&self) -> Result<(), ConfigError> {
        self.auth.jwt.validate()?;
        self.auth.blacklist.validate()
    }

    /// Validate the settings the delegating (publication) service needs
    pub fn validate_for_delegate(&self) -> Result<(), ConfigError> {
        self.remote_validation.validate()
    }
}

/// Read an environment variable and parse it, falling back to `default`
/// when the variable is absent or unparsable.
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_not_valid_for_issuer() {
        // Default carries an empty secret on purpose
        let config = AppConfig::default();
        assert!(matches!(
            config.validate_for_issuer(),
            Err(ConfigError::Missing { .. })
        ));
    }

    #[test]
    fn test_config_with_secret_is_valid_for_issuer() {
        let mut config = AppConfig::default();
        config.auth.jwt = JwtConfig::new("a-test-signing-secret");
        assert!(config.validate_for_issuer().is_ok());
    }
}
