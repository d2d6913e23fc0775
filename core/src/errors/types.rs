//! Error types for authentication, token handling and input validation

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User not found")]
    UserNotFound,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Insufficient permissions")]
    InsufficientPermissions,
}

/// Token-related errors
///
/// `Configuration` is fatal at startup, `Malformed` means the input is not a
/// compact signed token at all, and the remaining verification variants are
/// the invalid-token family reported by [`TokenError::is_invalid_token`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token configuration error: {message}")]
    Configuration { message: String },

    #[error("Malformed token: {reason}")]
    Malformed { reason: String },

    #[error("Token expired")]
    Expired,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Invalid token issuer")]
    InvalidIssuer,

    #[error("Invalid token audience")]
    InvalidAudience,

    #[error("Invalid token claims: {reason}")]
    InvalidClaims { reason: String },

    #[error("Token revoked")]
    Revoked,

    #[error("Token generation failed")]
    GenerationFailed,
}

impl TokenError {
    /// Whether this error is a failed signature/issuer/audience/expiry check
    pub fn is_invalid_token(&self) -> bool {
        matches!(
            self,
            TokenError::Expired
                | TokenError::InvalidSignature
                | TokenError::InvalidIssuer
                | TokenError::InvalidAudience
                | TokenError::InvalidClaims { .. }
        )
    }
}

/// Validation errors for user-supplied values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field required: {field}")]
    RequiredField { field: String },

    #[error("{field} must be longer than {min} characters")]
    TooShort { field: String, min: usize },

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid identifier for field: {field}")]
    InvalidId { field: String },
}
