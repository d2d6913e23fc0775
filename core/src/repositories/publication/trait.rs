//! Publication repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::publication::Publication;
use crate::errors::DomainError;

/// Repository trait for Publication entity persistence operations
#[async_trait]
pub trait PublicationRepository: Send + Sync {
    async fn create(&self, publication: Publication) -> Result<Publication, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Publication>, DomainError>;

    /// All publications owned by `user_id`, newest first
    async fn find_by_user(&self, user_id: &str) -> Result<Vec<Publication>, DomainError>;

    /// Delete a publication
    ///
    /// # Returns
    /// * `Ok(true)` - The publication existed and was removed
    /// * `Ok(false)` - No publication with that ID
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
