//! Server configuration module

use serde::{Deserialize, Serialize};

use super::{env_or, Environment};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8080,
            workers: 0, // Use all CPU cores
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env(default_port: u16) -> Self {
        Self {
            host: std::env::var("SERVER_HOST").unwrap_or_else(|_| String::from("127.0.0.1")),
            port: env_or("SERVER_PORT", default_port),
            workers: env_or("SERVER_WORKERS", 0),
        }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Allowed origins; empty together with `allow_any_origin = false`
    /// means same-origin only
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Accept any origin (development only)
    #[serde(default)]
    pub allow_any_origin: bool,

    /// Max age for preflight cache in seconds
    #[serde(default = "default_max_age")]
    pub max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![],
            allow_any_origin: false,
            max_age: default_max_age(),
        }
    }
}

impl CorsConfig {
    /// Create a permissive CORS configuration for development
    pub fn development() -> Self {
        Self {
            allowed_origins: vec![],
            allow_any_origin: true,
            max_age: 3600,
        }
    }

    /// Create from environment variables
    ///
    /// `ALLOWED_ORIGINS` is a comma-separated list. Outside production an
    /// empty list falls back to the permissive development policy.
    pub fn from_env(environment: Environment) -> Self {
        let allowed_origins: Vec<String> = std::env::var("ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();
        let max_age = env_or("CORS_MAX_AGE", default_max_age());

        if allowed_origins.is_empty() && !environment.is_production() {
            return Self {
                max_age,
                ..Self::development()
            };
        }

        Self {
            allowed_origins,
            allow_any_origin: false,
            max_age,
        }
    }
}

fn default_max_age() -> usize {
    3600
}
