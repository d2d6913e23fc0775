use actix_web::{http::StatusCode, web, HttpResponse};

use ph_core::repositories::{BlacklistStore, UserRepository};
use ph_core::services::PasswordHasher;
use ph_shared::errors::error_codes;

use crate::dto::UserResponse;
use crate::handlers::{error_response, handle_domain_error};
use crate::middleware::auth::AuthContext;

use super::AppState;

/// Handler for GET /api/user/me
pub async fn me<U, H, B>(state: web::Data<AppState<U, H, B>>, auth: AuthContext) -> HttpResponse
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
    B: BlacklistStore + 'static,
{
    match state.user_service.get_by_id(&auth.user_id).await {
        Ok(Some(user)) => HttpResponse::Ok().json(UserResponse::from(&user)),
        Ok(None) => error_response(StatusCode::NOT_FOUND, error_codes::NOT_FOUND, "User not found"),
        Err(error) => handle_domain_error(&error),
    }
}
