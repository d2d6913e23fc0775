use actix_web::{web, HttpRequest, HttpResponse};

use ph_core::repositories::{BlacklistStore, UserRepository};
use ph_core::services::PasswordHasher;

use crate::dto::ValidateTokenResponse;
use crate::handlers::missing_token;
use crate::middleware::auth::extract_bearer_token;

use super::AppState;

/// Handler for POST /api/user/validate-token
///
/// Answers delegating services. Not protected by the JWT middleware: an
/// invalid token is a normal `200` answer with `isValid: false`.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "isValid": true, "sub": "0b6f4c2e-..." }
/// ```
///
/// ## Errors
/// - 400 Bad Request: No bearer token supplied
pub async fn validate_token<U, H, B>(
    req: HttpRequest,
    state: web::Data<AppState<U, H, B>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
    B: BlacklistStore + 'static,
{
    let Some(token) = extract_bearer_token(req.headers()) else {
        return missing_token();
    };

    let result = state.token_service.validate_with_subject(&token).await;
    HttpResponse::Ok().json(ValidateTokenResponse {
        is_valid: result.is_valid(),
        sub: result.subject,
    })
}
