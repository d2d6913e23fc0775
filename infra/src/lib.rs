//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the PubHub services.
//! It provides concrete implementations of the ports defined in `ph_core`:
//!
//! - **Repositories**: in-process user and publication storage
//! - **Security**: bcrypt password hashing
//! - **HTTP**: the client that delegates token validation to the user service

// Re-export core types for convenience
pub use ph_core::errors::*;

/// Repository implementations
pub mod repositories;

/// Password hashing
pub mod security;

/// Outbound HTTP clients
pub mod http;

pub use http::HttpTokenValidator;
pub use repositories::{InMemoryPublicationRepository, InMemoryUserRepository};
pub use security::BcryptPasswordHasher;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Password hashing error
    #[error("Password hashing error: {0}")]
    Hashing(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        DomainError::Internal {
            message: error.to_string(),
        }
    }
}
