use actix_web::{http::StatusCode, web, HttpResponse};

use ph_core::repositories::{BlacklistStore, UserRepository};
use ph_core::services::PasswordHasher;
use ph_shared::errors::error_codes;

use crate::dto::LogoutResponse;
use crate::handlers::error_response;
use crate::middleware::auth::AuthContext;

use super::AppState;

/// Handler for POST /api/user/logout
///
/// Revokes the bearer token the request was authenticated with. The token
/// stays rejected until its own expiry.
///
/// ## Errors
/// - 401 Unauthorized: Missing or invalid token (middleware)
/// - 400 Bad Request: The token could not be revoked
pub async fn logout<U, H, B>(
    state: web::Data<AppState<U, H, B>>,
    auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
    B: BlacklistStore + 'static,
{
    if state.token_service.revoke(&auth.token).await {
        log::info!("User {} logged out", auth.user_id);
        HttpResponse::Ok().json(LogoutResponse {
            message: "Logout successful".to_string(),
        })
    } else {
        error_response(
            StatusCode::BAD_REQUEST,
            error_codes::LOGOUT_FAILED,
            "Logout failed. Invalid token.",
        )
    }
}
