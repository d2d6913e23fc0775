//! User service route handlers
//!
//! Account management plus the token endpoints: login issues a token,
//! logout revokes it, refresh rotates it, and validate-token answers
//! delegating services.

pub mod edit;
pub mod login;
pub mod logout;
pub mod me;
pub mod refresh;
pub mod register;
pub mod validate_token;

use std::sync::Arc;

use ph_core::repositories::{BlacklistStore, UserRepository};
use ph_core::services::{PasswordHasher, TokenService, UserService};

/// Application state shared by the user service handlers
pub struct AppState<U, H, B>
where
    U: UserRepository,
    H: PasswordHasher,
    B: BlacklistStore,
{
    pub user_service: Arc<UserService<U, H>>,
    pub token_service: Arc<TokenService<B>>,
}

impl<U, H, B> AppState<U, H, B>
where
    U: UserRepository,
    H: PasswordHasher,
    B: BlacklistStore,
{
    pub fn new(user_service: Arc<UserService<U, H>>, token_service: Arc<TokenService<B>>) -> Self {
        Self {
            user_service,
            token_service,
        }
    }
}
