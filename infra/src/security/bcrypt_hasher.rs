//! Bcrypt implementation of the password hasher port

use async_trait::async_trait;

use ph_core::errors::DomainError;
use ph_core::services::PasswordHasher;

use crate::InfrastructureError;

/// Hashes passwords with bcrypt on the blocking thread pool
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new() -> Self {
        Self::with_cost(bcrypt::DEFAULT_COST)
    }

    /// Use a custom work factor (4..=31)
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, password: &str) -> Result<String, DomainError> {
        let password = password.to_string();
        let cost = self.cost;
        let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| InfrastructureError::General(e.to_string()))?
            .map_err(|e| InfrastructureError::Hashing(e.to_string()))?;
        Ok(hashed)
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError> {
        let password = password.to_string();
        let hash = hash.to_string();
        let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| InfrastructureError::General(e.to_string()))?
            .map_err(|e| InfrastructureError::Hashing(e.to_string()))?;
        Ok(matches)
    }
}
