//! Application factories
//!
//! One factory per service binary. Both are generic over the adapters so
//! tests can build the same application around in-memory implementations.

use std::sync::Arc;

use actix_web::{
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error, HttpResponse,
};

use ph_core::repositories::{BlacklistStore, PublicationRepository, UserRepository};
use ph_core::services::{PasswordHasher, RemoteTokenValidator};

use crate::middleware::auth::{JwtAuth, TokenVerifier};
use crate::routes::publications::{self, create, delete, get_by_id, list_user};
use crate::routes::users::{
    self, edit, login, logout, me, refresh, register, validate_token,
};

/// Create the user service application
pub fn create_user_app<U, H, B>(
    app_state: web::Data<users::AppState<U, H, B>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
    B: BlacklistStore + 'static,
{
    let verifier: Arc<dyn TokenVerifier> = app_state.token_service.clone();
    let jwt = JwtAuth::new(verifier);

    App::new()
        .app_data(app_state)
        .service(
            web::scope("/api/user")
                .route("/register", web::post().to(register::register::<U, H, B>))
                .route("/login", web::post().to(login::login::<U, H, B>))
                .route(
                    "/validate-token",
                    web::post().to(validate_token::validate_token::<U, H, B>),
                )
                .route("/refresh", web::post().to(refresh::refresh::<U, H, B>))
                .route(
                    "/logout",
                    web::post()
                        .to(logout::logout::<U, H, B>)
                        .wrap(jwt.clone()),
                )
                .route(
                    "/me",
                    web::get().to(me::me::<U, H, B>).wrap(jwt.clone()),
                )
                .route(
                    "",
                    web::put().to(edit::edit::<U, H, B>).wrap(jwt),
                )
                .route("/health", web::get().to(user_health_check)),
        )
        .default_service(web::route().to(not_found))
}

/// Create the publication service application
pub fn create_publication_app<P, V>(
    app_state: web::Data<publications::AppState<P, V>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = Error,
        InitError = (),
    >,
>
where
    P: PublicationRepository + 'static,
    V: RemoteTokenValidator + 'static,
{
    App::new()
        .app_data(app_state)
        .service(
            web::scope("/api/publication")
                .route("", web::post().to(create::create::<P, V>))
                .route("/health", web::get().to(publication_health_check))
                .route("/user", web::get().to(list_user::list_user::<P, V>))
                .route("/{id}", web::get().to(get_by_id::get_by_id::<P, V>))
                .route("/{id}", web::delete().to(delete::delete::<P, V>)),
        )
        .default_service(web::route().to(not_found))
}

async fn user_health_check() -> HttpResponse {
    health_check("pubhub-user-service")
}

async fn publication_health_check() -> HttpResponse {
    health_check("pubhub-publication-service")
}

fn health_check(service: &str) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": service,
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
