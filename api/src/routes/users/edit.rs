use actix_web::{web, HttpResponse};

use ph_core::repositories::{BlacklistStore, UserRepository};
use ph_core::services::PasswordHasher;

use crate::dto::EditUserRequest;
use crate::handlers::handle_domain_error;
use crate::middleware::auth::AuthContext;

use super::AppState;

/// Handler for PUT /api/user
///
/// Updates the caller's own profile. Omitted or empty fields keep their
/// current value; a new password is re-hashed.
///
/// ## Errors
/// - 400 Bad Request: A supplied value is invalid
/// - 404 Not Found: The account no longer exists
/// - 409 Conflict: The new email belongs to another account
pub async fn edit<U, H, B>(
    state: web::Data<AppState<U, H, B>>,
    auth: AuthContext,
    request: web::Json<EditUserRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
    B: BlacklistStore + 'static,
{
    match state
        .user_service
        .edit(&auth.user_id, request.into_inner().into_changes())
        .await
    {
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(&error),
    }
}
