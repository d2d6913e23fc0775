//! In-memory publication repository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use ph_core::domain::entities::publication::Publication;
use ph_core::errors::DomainError;
use ph_core::repositories::PublicationRepository;

#[derive(Clone, Default)]
pub struct InMemoryPublicationRepository {
    publications: Arc<RwLock<HashMap<Uuid, Publication>>>,
}

impl InMemoryPublicationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PublicationRepository for InMemoryPublicationRepository {
    async fn create(&self, publication: Publication) -> Result<Publication, DomainError> {
        let mut publications = self.publications.write().await;
        publications.insert(publication.id, publication.clone());
        Ok(publication)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Publication>, DomainError> {
        let publications = self.publications.read().await;
        Ok(publications.get(&id).cloned())
    }

    async fn find_by_user(&self, user_id: &str) -> Result<Vec<Publication>, DomainError> {
        let publications = self.publications.read().await;
        let mut owned: Vec<Publication> = publications
            .values()
            .filter(|p| p.is_owned_by(user_id))
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut publications = self.publications.write().await;
        Ok(publications.remove(&id).is_some())
    }
}
