//! Deployment stage, read from `ENVIRONMENT`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{env_or, ConfigError};

/// Where the services are running. Drives the default log filter and
/// whether CORS may fall back to accepting any origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Reads `ENVIRONMENT`; unset or unrecognised values mean development
    pub fn from_env() -> Self {
        env_or("ENVIRONMENT", Environment::Development)
    }

    pub fn is_production(&self) -> bool {
        *self == Environment::Production
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    /// `RUST_LOG` fallback used by the service binaries
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Environment::Development => "debug",
            Environment::Staging => "info",
            Environment::Production => "info,actix_web=warn",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "staging" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(ConfigError::Invalid {
                key: "ENVIRONMENT".to_string(),
                reason: format!("unknown deployment stage '{}'", value),
            }),
        }
    }
}
