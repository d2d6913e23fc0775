//! Publication entity: a titled text post owned by a user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationError;

/// Title and content must be longer than this many characters
pub const MIN_TEXT_LENGTH: usize = 3;

fn parse_text(field: &str, value: String) -> Result<String, ValidationError> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(ValidationError::RequiredField {
            field: field.to_string(),
        });
    }
    if value.chars().count() <= MIN_TEXT_LENGTH {
        return Err(ValidationError::TooShort {
            field: field.to_string(),
            min: MIN_TEXT_LENGTH,
        });
    }
    Ok(value)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PublicationTitle(String);

impl PublicationTitle {
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        parse_text("title", value.into()).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PublicationTitle {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<PublicationTitle> for String {
    fn from(title: PublicationTitle) -> Self {
        title.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PublicationContent(String);

impl PublicationContent {
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        parse_text("content", value.into()).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PublicationContent {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<PublicationContent> for String {
    fn from(content: PublicationContent) -> Self {
        content.0
    }
}

/// Publication entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub id: Uuid,

    pub title: PublicationTitle,

    pub content: PublicationContent,

    /// Subject of the token the publication was created with
    pub user_id: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Publication {
    pub fn new(
        title: PublicationTitle,
        content: PublicationContent,
        user_id: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            user_id: user_id.into(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}
