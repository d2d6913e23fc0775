//! Token validation for services that do not hold the signing secret
//!
//! Validation is delegated to the issuing service over HTTP. An optional
//! fast path reads the subject from the token without verifying it; it is
//! off unless explicitly enabled.

mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use service::TokenValidationService;
pub use traits::{subject_from_response, RemoteTokenValidator, RemoteValidationError};
