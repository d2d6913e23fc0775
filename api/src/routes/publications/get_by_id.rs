use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};

use ph_core::repositories::PublicationRepository;
use ph_core::services::RemoteTokenValidator;
use ph_shared::errors::error_codes;

use crate::dto::PublicationResponse;
use crate::handlers::{error_response, handle_domain_error};

use super::AppState;

/// Handler for GET /api/publication/{id}
pub async fn get_by_id<P, V>(
    req: HttpRequest,
    state: web::Data<AppState<P, V>>,
    path: web::Path<String>,
) -> HttpResponse
where
    P: PublicationRepository + 'static,
    V: RemoteTokenValidator + 'static,
{
    if let Err(response) = state.authenticate(&req).await {
        return response;
    }

    match state.publication_service.get_by_id(&path).await {
        Ok(Some(publication)) => HttpResponse::Ok().json(PublicationResponse::from(&publication)),
        Ok(None) => error_response(
            StatusCode::NOT_FOUND,
            error_codes::NOT_FOUND,
            "Publication not found",
        ),
        Err(error) => handle_domain_error(&error),
    }
}
