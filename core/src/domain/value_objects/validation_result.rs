//! Outcome of validating a token.

use serde::{Deserialize, Serialize};

/// Whether a token is acceptable and, when it is, the subject it identifies
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

impl ValidationResult {
    pub fn valid(subject: impl Into<String>) -> Self {
        Self {
            valid: true,
            subject: Some(subject.into()),
        }
    }

    pub fn invalid() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_has_no_subject() {
        let result = ValidationResult::invalid();
        assert!(!result.is_valid());
        assert_eq!(result.subject(), None);
    }

    #[test]
    fn test_valid_carries_subject() {
        let result = ValidationResult::valid("user-1");
        assert!(result.is_valid());
        assert_eq!(result.subject(), Some("user-1"));
    }
}
