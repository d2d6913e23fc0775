//! HTTP client that asks the user service whether a token is valid
//!
//! Sends `POST <endpoint>` with `Authorization: Bearer <token>` and expects
//! a JSON body carrying the token's `sub`.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use ph_core::domain::entities::token::token_fingerprint;
use ph_core::services::validation::{
    subject_from_response, RemoteTokenValidator, RemoteValidationError,
};
use ph_shared::config::RemoteValidationConfig;

use crate::InfrastructureError;

pub struct HttpTokenValidator {
    client: reqwest::Client,
    endpoint: String,
    timeout_secs: u64,
}

impl HttpTokenValidator {
    /// Build a validator from configuration
    ///
    /// # Errors
    /// `InfrastructureError::Config` for an invalid endpoint or timeout,
    /// `InfrastructureError::Http` if the HTTP client cannot be built
    pub fn new(config: &RemoteValidationConfig) -> Result<Self, InfrastructureError> {
        config
            .validate()
            .map_err(|e| InfrastructureError::Config(e.to_string()))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            timeout_secs: config.timeout_secs,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn map_transport_error(&self, error: reqwest::Error) -> RemoteValidationError {
        if error.is_timeout() {
            RemoteValidationError::Timeout {
                seconds: self.timeout_secs,
            }
        } else {
            RemoteValidationError::Transport {
                message: error.to_string(),
            }
        }
    }
}

#[async_trait]
impl RemoteTokenValidator for HttpTokenValidator {
    async fn validate_remote(&self, token: &str) -> Result<String, RemoteValidationError> {
        debug!(
            "Validating token {}... against {}",
            token_fingerprint(token),
            self.endpoint
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteValidationError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;
        subject_from_response(&body)
    }
}
