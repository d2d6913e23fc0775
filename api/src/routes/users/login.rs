use actix_web::{http::StatusCode, web, HttpResponse};

use ph_core::repositories::{BlacklistStore, UserRepository};
use ph_core::services::PasswordHasher;
use ph_shared::errors::error_codes;

use crate::dto::{LoginRequest, TokenResponse};
use crate::handlers::{error_response, handle_domain_error};

use super::AppState;

/// Handler for POST /api/user/login
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiJ9..." }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: Unknown email or wrong password
pub async fn login<U, H, B>(
    state: web::Data<AppState<U, H, B>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
    B: BlacklistStore + 'static,
{
    let user = match state
        .user_service
        .login(&request.email, &request.password)
        .await
    {
        Ok(Some(user)) => user,
        Ok(None) => {
            return error_response(
                StatusCode::UNAUTHORIZED,
                error_codes::UNAUTHORIZED,
                "Invalid email or password",
            )
        }
        Err(error) => return handle_domain_error(&error),
    };

    match state.token_service.issue(&user) {
        Ok(token) => HttpResponse::Ok().json(TokenResponse { token }),
        Err(error) => handle_domain_error(&error),
    }
}
