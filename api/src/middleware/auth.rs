//! JWT authentication middleware for protecting API endpoints.
//!
//! This middleware extracts the bearer token from the Authorization header,
//! verifies it against the blacklist and the signing key, and injects the
//! caller's context into the request. Any failure ends the request with
//! `401 Unauthorized`.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::{
        header::{HeaderMap, AUTHORIZATION},
        StatusCode,
    },
    Error, FromRequest, HttpMessage, HttpRequest,
};
use async_trait::async_trait;
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use ph_core::domain::entities::{token_fingerprint, Claims};
use ph_core::errors::DomainError;
use ph_core::repositories::BlacklistStore;
use ph_core::services::TokenService;
use ph_shared::errors::error_codes;

use crate::handlers::error_response;

/// Authenticated caller injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Subject (`sub`) of the verified token
    pub user_id: String,
    pub email: String,
    /// JWT ID for tracking
    pub jti: String,
    /// The raw bearer token, needed to revoke it on logout
    pub token: String,
}

impl AuthContext {
    pub fn from_claims(claims: Claims, token: String) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.email,
            jti: claims.jti,
            token,
        }
    }
}

/// Trait for wrapping TokenService to allow dynamic dispatch
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify_token(&self, token: &str) -> Result<Claims, DomainError>;
}

#[async_trait]
impl<B: BlacklistStore + 'static> TokenVerifier for TokenService<B> {
    async fn verify_token(&self, token: &str) -> Result<Claims, DomainError> {
        self.verify(token).await
    }
}

/// JWT authentication middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    verifier: Arc<dyn TokenVerifier>,
}

impl JwtAuth {
    pub fn new(verifier: Arc<dyn TokenVerifier>) -> Self {
        Self { verifier }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            verifier: Arc::clone(&self.verifier),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    verifier: Arc<dyn TokenVerifier>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let verifier = Arc::clone(&self.verifier);

        Box::pin(async move {
            let token = match extract_bearer_token(req.headers()) {
                Some(token) => token,
                None => {
                    return Ok(reject(req, "Missing or invalid Authorization header"));
                }
            };

            let claims = match verifier.verify_token(&token).await {
                Ok(claims) => claims,
                Err(e) => {
                    log::debug!(
                        "Rejected token {}...: {}",
                        token_fingerprint(&token),
                        e
                    );
                    return Ok(reject(req, "Invalid or expired token"));
                }
            };

            req.extensions_mut()
                .insert(AuthContext::from_claims(claims, token));

            service
                .call(req)
                .await
                .map(ServiceResponse::map_into_left_body)
        })
    }
}

/// End the request with a 401 JSON body
fn reject<B>(req: ServiceRequest, message: &str) -> ServiceResponse<EitherBody<B>> {
    req.into_response(
        error_response(StatusCode::UNAUTHORIZED, error_codes::UNAUTHORIZED, message)
            .map_into_right_body(),
    )
}

fn unauthorized(message: &str) -> Error {
    InternalError::from_response(
        message.to_string(),
        error_response(StatusCode::UNAUTHORIZED, error_codes::UNAUTHORIZED, message),
    )
    .into()
}

/// Extracts the bearer token from the Authorization header
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| unauthorized("Authentication required"));

        ready(result)
    }
}
