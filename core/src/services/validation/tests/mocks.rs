//! Mock remote validators

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::services::validation::{RemoteTokenValidator, RemoteValidationError};

/// Answers every call with a fixed result and counts calls
pub struct MockRemoteValidator {
    response: Result<String, RemoteValidationError>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl MockRemoteValidator {
    pub fn confirming(subject: &str) -> Self {
        Self {
            response: Ok(subject.to_string()),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: RemoteValidationError) -> Self {
        Self {
            response: Err(error),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteTokenValidator for MockRemoteValidator {
    async fn validate_remote(&self, _token: &str) -> Result<String, RemoteValidationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.response.clone()
    }
}
