//! Domain entities representing core business objects.

pub mod publication;
pub mod token;
pub mod user;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use publication::{Publication, PublicationContent, PublicationTitle};
pub use token::{
    token_fingerprint, Claims, OrigIatError, RawClaims, DEFAULT_EXPIRATION_MINUTES,
    ORIG_IAT_CLAIM, REFRESH_EXTENSION_MINUTES, REFRESH_WINDOW_HOURS,
};
pub use user::{User, UserEmail, UserName};
