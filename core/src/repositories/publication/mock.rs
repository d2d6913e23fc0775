//! Mock implementation of PublicationRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::publication::Publication;
use crate::errors::DomainError;

use super::trait_::PublicationRepository;

pub struct MockPublicationRepository {
    publications: Arc<RwLock<HashMap<Uuid, Publication>>>,
}

impl MockPublicationRepository {
    pub fn new() -> Self {
        Self {
            publications: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockPublicationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PublicationRepository for MockPublicationRepository {
    async fn create(&self, publication: Publication) -> Result<Publication, DomainError> {
        let mut publications = self.publications.write().await;
        publications.insert(publication.id, publication.clone());
        Ok(publication)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Publication>, DomainError> {
        Ok(self.publications.read().await.get(&id).cloned())
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
        Ok(self.publications.write().await.remove(&id).is_some())
    }
}
