use actix_web::{web, HttpRequest, HttpResponse};

use ph_core::repositories::PublicationRepository;
use ph_core::services::RemoteTokenValidator;

use crate::dto::PublicationResponse;
use crate::handlers::handle_domain_error;

use super::AppState;

/// Handler for GET /api/publication/user
///
/// Lists the caller's publications, newest first.
pub async fn list_user<P, V>(req: HttpRequest, state: web::Data<AppState<P, V>>) -> HttpResponse
where
    P: PublicationRepository + 'static,
    V: RemoteTokenValidator + 'static,
{
    let owner = match state.authenticate(&req).await {
        Ok(owner) => owner,
        Err(response) => return response,
    };

    match state.publication_service.list_by_user(&owner).await {
        Ok(publications) => HttpResponse::Ok().json(
            publications
                .iter()
                .map(PublicationResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(error) => handle_domain_error(&error),
    }
}
