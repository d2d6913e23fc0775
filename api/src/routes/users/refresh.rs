use actix_web::{web, HttpRequest, HttpResponse};

use ph_core::repositories::{BlacklistStore, UserRepository};
use ph_core::services::PasswordHasher;

use crate::dto::TokenResponse;
use crate::handlers::{handle_refresh_rejection, missing_token};
use crate::middleware::auth::extract_bearer_token;

use super::AppState;

/// Handler for POST /api/user/refresh
///
/// Exchanges the bearer token for a rotated one. The route is not behind
/// the JWT middleware because an expired token may still be refreshed
/// inside the refresh window; the lifecycle service checks the token's
/// signature, issuer and audience itself.
///
/// ## Errors
/// - 400 Bad Request: No bearer token, or the refresh was rejected. The
///   body's `message` explains the rejection.
pub async fn refresh<U, H, B>(
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

    match state.token_service.refresh(&token).await {
        Ok(refreshed) => HttpResponse::Ok().json(TokenResponse {
            token: refreshed.token,
        }),
        Err(rejection) => handle_refresh_rejection(&rejection),
    }
}
