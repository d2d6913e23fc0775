//! Shared configuration and common types for the PubHub services
//!
//! This crate provides functionality used by every server crate:
//! - Configuration types loaded from the environment
//! - Error response structures and error codes

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, BlacklistConfig, ConfigError, CorsConfig, Environment, JwtConfig,
    RemoteValidationConfig, ServerConfig,
};
pub use errors::{error_codes, ErrorResponse};
