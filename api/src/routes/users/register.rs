use actix_web::{http::header, web, HttpResponse};
use validator::Validate;

use ph_core::repositories::{BlacklistStore, UserRepository};
use ph_core::services::PasswordHasher;

use crate::dto::RegisterRequest;
use crate::handlers::{handle_domain_error, handle_validation_errors};

use super::AppState;

/// Handler for POST /api/user/register
///
/// Creates an account and answers `201 Created` with the new user's
/// location. The body is empty.
///
/// ## Errors
/// - 400 Bad Request: Invalid name, email or password
/// - 409 Conflict: Email already registered
pub async fn register<U, H, B>(
    state: web::Data<AppState<U, H, B>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
    B: BlacklistStore + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    let request = request.into_inner();
    match state
        .user_service
        .register(&request.name, &request.email, &request.password)
        .await
    {
        Ok(user) => HttpResponse::Created()
            .insert_header((header::LOCATION, format!("/api/user/{}", user.id)))
            .finish(),
        Err(error) => handle_domain_error(&error),
    }
}
