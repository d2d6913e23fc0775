//! Value objects representing immutable domain concepts.

pub mod refresh;
pub mod validation_result;

// Re-export commonly used types
pub use refresh::{RefreshRejection, RefreshedToken};
pub use validation_result::ValidationResult;
