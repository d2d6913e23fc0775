use actix_web::{web, HttpRequest, HttpResponse};

use ph_core::repositories::PublicationRepository;
use ph_core::services::RemoteTokenValidator;

use crate::handlers::handle_domain_error;

use super::AppState;

/// Handler for DELETE /api/publication/{id}
///
/// ## Errors
/// - 400 Bad Request: No bearer token, or the ID is not a UUID
/// - 401 Unauthorized: Token not accepted
/// - 403 Forbidden: The publication belongs to someone else
/// - 404 Not Found: No such publication
pub async fn delete<P, V>(
    req: HttpRequest,
    state: web::Data<AppState<P, V>>,
    path: web::Path<String>,
) -> HttpResponse
where
    P: PublicationRepository + 'static,
    V: RemoteTokenValidator + 'static,
{
    let requester = match state.authenticate(&req).await {
        Ok(requester) => requester,
        Err(response) => return response,
    };

    match state.publication_service.delete(&path, &requester).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(&error),
    }
}
