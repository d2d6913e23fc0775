//! Publication service route handlers
//!
//! This service does not hold the signing secret. Every route resolves the
//! caller through [`TokenValidationService`], which delegates to the user
//! service's `validate-token` endpoint.

pub mod create;
pub mod delete;
pub mod get_by_id;
pub mod list_user;

use std::sync::Arc;

use actix_web::{http::StatusCode, HttpRequest, HttpResponse};

use ph_core::domain::entities::token_fingerprint;
use ph_core::repositories::PublicationRepository;
use ph_core::services::{PublicationService, RemoteTokenValidator, TokenValidationService};
use ph_shared::errors::error_codes;

use crate::handlers::{error_response, missing_token};
use crate::middleware::auth::extract_bearer_token;

/// Application state shared by the publication service handlers
pub struct AppState<P, V>
where
    P: PublicationRepository,
    V: RemoteTokenValidator,
{
    pub publication_service: Arc<PublicationService<P>>,
    pub validation_service: Arc<TokenValidationService<V>>,
}

impl<P, V> AppState<P, V>
where
    P: PublicationRepository,
    V: RemoteTokenValidator,
{
    pub fn new(
        publication_service: Arc<PublicationService<P>>,
        validation_service: Arc<TokenValidationService<V>>,
    ) -> Self {
        Self {
            publication_service,
            validation_service,
        }
    }

    /// Resolve the caller's subject from the bearer token
    ///
    /// Returns the response to send instead when there is no token (400)
    /// or the token is not accepted (401).
    pub(crate) async fn authenticate(&self, req: &HttpRequest) -> Result<String, HttpResponse> {
        let token = extract_bearer_token(req.headers()).ok_or_else(missing_token)?;

        let result = self.validation_service.validate(&token).await;
        match result.subject {
            Some(subject) if result.valid => Ok(subject),
            _ => {
                log::info!("Token {}... was not accepted", token_fingerprint(&token));
                Err(error_response(
                    StatusCode::UNAUTHORIZED,
                    error_codes::TOKEN_INVALID,
                    "Invalid token",
                ))
            }
        }
    }
}
