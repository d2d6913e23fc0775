use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use ph_core::domain::entities::Publication;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePublicationRequest {
    #[validate(length(min = 4, max = 200))]
    pub title: String,

    #[validate(length(min = 4))]
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Publication> for PublicationResponse {
    fn from(publication: &Publication) -> Self {
        Self {
            id: publication.id.to_string(),
            title: publication.title.as_str().to_string(),
            content: publication.content.as_str().to_string(),
            user_id: publication.user_id.clone(),
            created_at: publication.created_at,
            updated_at: publication.updated_at,
        }
    }
}
