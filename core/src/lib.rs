//! # PubHub Core
//!
//! Core business logic and domain layer for the PubHub backend.
//! This crate contains domain entities, the token lifecycle engine, the
//! user and publication services, repository interfaces, and the error
//! types that the infrastructure and API layers build on.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Claims, Publication, RawClaims, User};
pub use domain::value_objects::{RefreshRejection, RefreshedToken, ValidationResult};
pub use errors::{AuthError, DomainError, DomainResult, TokenError, ValidationError};
pub use repositories::{
    BlacklistStore, InMemoryBlacklistStore, PublicationRepository, UserRepository,
};
pub use services::{
    BlacklistSweeper, Clock, PasswordHasher, PublicationService, RemoteTokenValidator,
    SystemClock, TokenService, TokenServiceConfig, TokenValidationService, UserService,
};
