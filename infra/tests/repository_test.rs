//! Integration tests for the in-memory repositories

use ph_core::domain::entities::publication::{Publication, PublicationContent, PublicationTitle};
use ph_core::domain::entities::user::{User, UserEmail, UserName};
use ph_core::errors::{AuthError, DomainError};
use ph_core::repositories::{PublicationRepository, UserRepository};
use ph_infra::{InMemoryPublicationRepository, InMemoryUserRepository};

fn user(name: &str, email: &str) -> User {
    User::new(
        UserName::parse(name).unwrap(),
        UserEmail::parse(email).unwrap(),
        "hash".to_string(),
    )
}

fn publication(title: &str, owner: &str) -> Publication {
    Publication::new(
        PublicationTitle::parse(title).unwrap(),
        PublicationContent::parse("Some body text").unwrap(),
        owner,
    )
}

#[tokio::test]
async fn test_user_repository_enforces_unique_email() {
    let repository = InMemoryUserRepository::new();
    let ana = repository.create(user("Ana Lopez", "ana@example.com")).await.unwrap();

    let duplicate = repository.create(user("Ana Other", "ana@example.com")).await;
    assert!(matches!(
        duplicate,
        Err(DomainError::Auth(AuthError::UserAlreadyExists))
    ));

    assert_eq!(
        repository.find_by_email("ana@example.com").await.unwrap().map(|u| u.id),
        Some(ana.id)
    );
    assert!(repository.exists_by_email("ana@example.com").await.unwrap());
    assert!(!repository.exists_by_email("bob@example.com").await.unwrap());
}

#[tokio::test]
async fn test_user_repository_update() {
    let repository = InMemoryUserRepository::new();
    let mut ana = repository.create(user("Ana Lopez", "ana@example.com")).await.unwrap();
    let bob = repository.create(user("Bob Smith", "bob@example.com")).await.unwrap();

    ana.update_info(Some(UserName::parse("Ana Maria").unwrap()), None, None);
    let updated = repository.update(ana.clone()).await.unwrap();
    assert_eq!(updated.name.as_str(), "Ana Maria");

    let mut stolen = bob.clone();
    stolen.email = UserEmail::parse("ana@example.com").unwrap();
    assert!(matches!(
        repository.update(stolen).await,
        Err(DomainError::Auth(AuthError::UserAlreadyExists))
    ));

    let stranger = user("Carl Jones", "carl@example.com");
    assert!(matches!(
        repository.update(stranger).await,
        Err(DomainError::Auth(AuthError::UserNotFound))
    ));
}

#[tokio::test]
async fn test_publication_repository_scopes_by_owner() {
    let repository = InMemoryPublicationRepository::new();
    let first = repository.create(publication("First post", "user-1")).await.unwrap();
    repository.create(publication("Second post", "user-1")).await.unwrap();
    repository.create(publication("Foreign post", "user-2")).await.unwrap();

    let owned = repository.find_by_user("user-1").await.unwrap();
    assert_eq!(owned.len(), 2);
    assert!(owned.windows(2).all(|w| w[0].created_at >= w[1].created_at));

    assert!(repository.delete(first.id).await.unwrap());
    assert!(!repository.delete(first.id).await.unwrap());
    assert!(repository.find_by_id(first.id).await.unwrap().is_none());
}
