//! Publication service implementation

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::entities::publication::{Publication, PublicationContent, PublicationTitle};
use crate::errors::{AuthError, DomainError, ValidationError};
use crate::repositories::PublicationRepository;

pub struct PublicationService<P: PublicationRepository> {
    repository: Arc<P>,
}

impl<P: PublicationRepository> PublicationService<P> {
    pub fn new(repository: Arc<P>) -> Self {
        Self { repository }
    }

    /// Create a publication owned by `owner`
    pub async fn create(
        &self,
        title: &str,
        content: &str,
        owner: &str,
    ) -> Result<Publication, DomainError> {
        let title = PublicationTitle::parse(title)?;
        let content = PublicationContent::parse(content)?;

        let publication = self
            .repository
            .create(Publication::new(title, content, owner))
            .await?;
        info!("User {} created publication {}", owner, publication.id);
        Ok(publication)
    }

    /// Publications owned by `owner`, newest first
    pub async fn list_by_user(&self, owner: &str) -> Result<Vec<Publication>, DomainError> {
        self.repository.find_by_user(owner).await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Publication>, DomainError> {
        let id = parse_publication_id(id)?;
        self.repository.find_by_id(id).await
    }

    /// Delete a publication on behalf of `requester`
    ///
    /// # Errors
    /// * `DomainError::NotFound` - No publication with that ID
    /// * `AuthError::InsufficientPermissions` - `requester` does not own it
    pub async fn delete(&self, id: &str, requester: &str) -> Result<(), DomainError> {
        let id = parse_publication_id(id)?;
        let publication = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("publication {}", id),
            })?;

        if !publication.is_owned_by(requester) {
            warn!(
                "User {} attempted to delete publication {} owned by {}",
                requester, id, publication.user_id
            );
            return Err(AuthError::InsufficientPermissions.into());
        }

        if !self.repository.delete(id).await? {
            return Err(DomainError::NotFound {
                resource: format!("publication {}", id),
            });
        }
        info!("User {} deleted publication {}", requester, id);
        Ok(())
    }
}

fn parse_publication_id(id: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(id.trim()).map_err(|_| ValidationError::InvalidId {
        field: "publication_id".to_string(),
    })
}
