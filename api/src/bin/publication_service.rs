//! Publication service: publications owned by users of the user service

use std::sync::Arc;

use actix_web::{middleware::Logger, web, HttpServer};
use anyhow::Context;
use log::{info, warn};

use ph_api::app::create_publication_app;
use ph_api::middleware::cors::create_cors;
use ph_api::routes::publications::AppState;
use ph_core::services::{PublicationService, TokenValidationService};
use ph_infra::{HttpTokenValidator, InMemoryPublicationRepository};
use ph_shared::config::AppConfig;

const DEFAULT_PORT: u16 = 8081;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env(DEFAULT_PORT);
    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(config.environment.default_log_filter()),
    );

    info!("Starting PubHub publication service ({})", config.environment);
    config
        .validate_for_delegate()
        .context("invalid publication service configuration")?;

    let remote = Arc::new(
        HttpTokenValidator::new(&config.remote_validation)
            .context("failed to build the token validation client")?,
    );
    info!("Delegating token validation to {}", remote.endpoint());

    let validation_service = Arc::new(TokenValidationService::new(
        remote,
        &config.remote_validation,
    ));
    if validation_service.trusts_unverified_subject() {
        warn!("Unverified token subjects are trusted; tokens are not checked by the user service");
    }

    let publication_service = Arc::new(PublicationService::new(Arc::new(
        InMemoryPublicationRepository::new(),
    )));

    let app_state = web::Data::new(AppState::new(publication_service, validation_service));
    let cors_config = config.cors.clone();
    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || {
        create_publication_app(app_state.clone())
            .wrap(create_cors(&cors_config))
            .wrap(Logger::default())
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}
