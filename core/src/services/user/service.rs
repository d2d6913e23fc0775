//! User service implementation

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::entities::user::{User, UserEmail, UserName};
use crate::errors::{AuthError, DomainError, ValidationError};
use crate::repositories::UserRepository;

use super::traits::PasswordHasher;

/// Fields a user may change on their own profile; `None` leaves a field as is
#[derive(Debug, Clone, Default)]
pub struct EditUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

pub struct UserService<U: UserRepository, H: PasswordHasher> {
    repository: Arc<U>,
    hasher: Arc<H>,
}

impl<U: UserRepository, H: PasswordHasher> UserService<U, H> {
    pub fn new(repository: Arc<U>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    /// Register a new account
    ///
    /// # Errors
    /// * `ValidationError` - Name, email or password is unacceptable
    /// * `AuthError::UserAlreadyExists` - The email is already registered
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, DomainError> {
        let name = UserName::parse(name)?;
        let email = UserEmail::parse(email)?;
        require_password(password)?;

        if self.repository.exists_by_email(email.as_str()).await? {
            warn!("Registration refused, email already in use");
            return Err(AuthError::UserAlreadyExists.into());
        }

        let password_hash = self.hasher.hash(password).await?;
        let user = self
            .repository
            .create(User::new(name, email, password_hash))
            .await?;

        info!("Registered user {}", user.id);
        Ok(user)
    }

    /// Check credentials
    ///
    /// # Returns
    /// * `Ok(Some(User))` - Email and password match
    /// * `Ok(None)` - Unknown email or wrong password
    pub async fn login(&self, email: &str, password: &str) -> Result<Option<User>, DomainError> {
        let Some(user) = self.repository.find_by_email(email.trim()).await? else {
            return Ok(None);
        };

        if self.hasher.verify(password, &user.password_hash).await? {
            info!("User {} logged in", user.id);
            Ok(Some(user))
        } else {
            warn!("Failed login for user {}", user.id);
            Ok(None)
        }
    }

    /// Look up a user by the subject of their token
    pub async fn get_by_id(&self, id: &str) -> Result<Option<User>, DomainError> {
        let id = parse_user_id(id)?;
        self.repository.find_by_id(id).await
    }

    /// Apply profile changes, re-hashing the password when one is given
    pub async fn edit(&self, id: &str, changes: EditUser) -> Result<User, DomainError> {
        let id = parse_user_id(id)?;
        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let name = changes.name.map(UserName::parse).transpose()?;
        let email = changes.email.map(UserEmail::parse).transpose()?;

        if let Some(email) = &email {
            if let Some(existing) = self.repository.find_by_email(email.as_str()).await? {
                if existing.id != user.id {
                    return Err(AuthError::UserAlreadyExists.into());
                }
            }
        }

        let password_hash = match changes.password {
            Some(password) => {
                require_password(&password)?;
                Some(self.hasher.hash(&password).await?)
            }
            None => None,
        };

        user.update_info(name, email, password_hash);
        let user = self.repository.update(user).await?;
        info!("Updated user {}", user.id);
        Ok(user)
    }
}

fn require_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::RequiredField {
            field: "password".to_string(),
        });
    }
    Ok(())
}

fn parse_user_id(id: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(id.trim()).map_err(|_| ValidationError::InvalidId {
        field: "user_id".to_string(),
    })
}
