//! Delegating token validation service

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use ph_shared::config::RemoteValidationConfig;

use crate::domain::entities::token::token_fingerprint;
use crate::domain::value_objects::ValidationResult;
use crate::services::token::decode_unverified;

use super::traits::{RemoteTokenValidator, RemoteValidationError};

pub struct TokenValidationService<V: RemoteTokenValidator> {
    remote: Arc<V>,
    timeout: Duration,
    trust_unverified_subject: bool,
}

impl<V: RemoteTokenValidator> TokenValidationService<V> {
    pub fn new(remote: Arc<V>, config: &RemoteValidationConfig) -> Self {
        Self {
            remote,
            timeout: Duration::from_secs(config.timeout_secs.max(1)),
            trust_unverified_subject: config.trust_unverified_subject,
        }
    }

    pub fn trusts_unverified_subject(&self) -> bool {
        self.trust_unverified_subject
    }

    /// Validate a token, never failing: any error yields an invalid result.
    ///
    /// With the unverified fast path enabled, a readable `sub` claim is
    /// accepted without contacting the remote authority.
    pub async fn validate(&self, token: &str) -> ValidationResult {
        let token = token.trim();
        if token.is_empty() {
            return ValidationResult::invalid();
        }
        let fingerprint = token_fingerprint(token);

        if self.trust_unverified_subject {
            match self.extract_subject(token) {
                Some(subject) => {
                    debug!("Accepted unverified subject for token {}...", fingerprint);
                    return ValidationResult::valid(subject);
                }
                None => debug!(
                    "No readable subject in token {}..., asking remote authority",
                    fingerprint
                ),
            }
        }

        match self.validate_remotely(token).await {
            Ok(subject) => {
                info!("Remote authority confirmed token {}...", fingerprint);
                ValidationResult::valid(subject)
            }
            Err(e) => {
                warn!("Token {}... not confirmed: {}", fingerprint, e);
                ValidationResult::invalid()
            }
        }
    }

    async fn validate_remotely(&self, token: &str) -> Result<String, RemoteValidationError> {
        match tokio::time::timeout(self.timeout, self.remote.validate_remote(token)).await {
            Ok(result) => result,
            Err(_) => Err(RemoteValidationError::Timeout {
                seconds: self.timeout.as_secs(),
            }),
        }
    }

    fn extract_subject(&self, token: &str) -> Option<String> {
        decode_unverified(token)
            .ok()
            .and_then(|claims| claims.subject().map(str::to_string))
    }
}
