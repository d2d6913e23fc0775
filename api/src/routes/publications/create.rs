use actix_web::{http::header, web, HttpRequest, HttpResponse};
use validator::Validate;

use ph_core::repositories::PublicationRepository;
use ph_core::services::RemoteTokenValidator;

use crate::dto::CreatePublicationRequest;
use crate::handlers::{handle_domain_error, handle_validation_errors};

use super::AppState;

/// Handler for POST /api/publication
///
/// Creates a publication owned by the caller and answers `201 Created`
/// with its location.
///
/// ## Errors
/// - 400 Bad Request: No bearer token, or title/content too short
/// - 401 Unauthorized: Token not accepted
pub async fn create<P, V>(
    req: HttpRequest,
    state: web::Data<AppState<P, V>>,
    request: web::Json<CreatePublicationRequest>,
) -> HttpResponse
where
    P: PublicationRepository + 'static,
    V: RemoteTokenValidator + 'static,
{
    let owner = match state.authenticate(&req).await {
        Ok(owner) => owner,
        Err(response) => return response,
    };

    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    match state
        .publication_service
        .create(&request.title, &request.content, &owner)
        .await
    {
        Ok(publication) => HttpResponse::Created()
            .insert_header((
                header::LOCATION,
                format!("/api/publication/{}", publication.id),
            ))
            .finish(),
        Err(error) => handle_domain_error(&error),
    }
}
