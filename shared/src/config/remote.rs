//! Remote token validation configuration
//!
//! Used by services that do not hold the signing secret and delegate
//! token validation to the issuing service.

use serde::{Deserialize, Serialize};

use super::{env_or, ConfigError};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RemoteValidationConfig {
    /// Endpoint receiving `POST` with `Authorization: Bearer <token>`
    #[serde(default)]
    pub endpoint: String,

    /// Upper bound on a single validation call, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Accept the `sub` claim of a token without checking its signature.
    ///
    /// Off unless explicitly enabled: the flag exists for deployments that
    /// still rely on the legacy fast path.
    #[serde(default)]
    pub trust_unverified_subject: bool,
}

impl Default for RemoteValidationConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            trust_unverified_subject: false,
        }
    }
}

impl RemoteValidationConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            endpoint: std::env::var("TOKEN_VALIDATION_ENDPOINT")
                .unwrap_or_else(|_| default_endpoint()),
            timeout_secs: env_or("TOKEN_VALIDATION_TIMEOUT_SECS", default_timeout_secs()),
            trust_unverified_subject: env_or("TOKEN_VALIDATION_TRUST_UNVERIFIED_SUBJECT", false),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::Missing {
                key: "TOKEN_VALIDATION_ENDPOINT".to_string(),
            });
        }
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                key: "TOKEN_VALIDATION_ENDPOINT".to_string(),
                reason: "must be an http(s) URL".to_string(),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "TOKEN_VALIDATION_TIMEOUT_SECS".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

fn default_endpoint() -> String {
    String::from("http://127.0.0.1:8080/api/user/validate-token")
}

fn default_timeout_secs() -> u64 {
    5
}
