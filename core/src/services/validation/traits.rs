//! Remote validation contract

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Why the remote authority did not confirm a token
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteValidationError {
    #[error("Remote validation timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("Remote validation request failed: {message}")]
    Transport { message: String },

    #[error("Remote validation returned status {status}")]
    Status { status: u16 },

    #[error("Remote validation rejected the token")]
    Rejected,

    #[error("Remote validation response has no subject")]
    MissingSubject,

    #[error("Remote validation response is not valid JSON: {message}")]
    InvalidBody { message: String },
}

/// A remote authority able to confirm a token and name its subject
#[async_trait]
pub trait RemoteTokenValidator: Send + Sync {
    /// Ask the authority about `token`
    ///
    /// # Returns
    /// * `Ok(subject)` - The token is valid and belongs to `subject`
    /// * `Err(RemoteValidationError)` - The token is not confirmed
    async fn validate_remote(&self, token: &str) -> Result<String, RemoteValidationError>;
}

/// Extract the subject from a successful validation response body.
///
/// The body is a JSON object with a `sub` string; an explicit
/// `"isValid": false` is treated as a rejection.
pub fn subject_from_response(body: &str) -> Result<String, RemoteValidationError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| RemoteValidationError::InvalidBody {
            message: e.to_string(),
        })?;

    if value.get("isValid").and_then(Value::as_bool) == Some(false) {
        return Err(RemoteValidationError::Rejected);
    }

    value
        .get("sub")
        .and_then(Value::as_str)
        .filter(|sub| !sub.trim().is_empty())
        .map(str::to_string)
        .ok_or(RemoteValidationError::MissingSubject)
}
