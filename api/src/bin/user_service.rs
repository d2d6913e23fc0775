//! User service: accounts, token issuing, refresh, logout and validation

use std::sync::Arc;

use actix_web::{middleware::Logger, web, HttpServer};
use anyhow::Context;
use log::info;

use ph_api::app::create_user_app;
use ph_api::middleware::cors::create_cors;
use ph_api::routes::users::AppState;
use ph_core::repositories::InMemoryBlacklistStore;
use ph_core::services::{
    BlacklistSweeper, BlacklistSweeperConfig, TokenService, TokenServiceConfig, UserService,
};
use ph_infra::{BcryptPasswordHasher, InMemoryUserRepository};
use ph_shared::config::AppConfig;

const DEFAULT_PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env(DEFAULT_PORT);
    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(config.environment.default_log_filter()),
    );

    info!("Starting PubHub user service ({})", config.environment);
    config
        .validate_for_issuer()
        .context("invalid user service configuration")?;

    let blacklist = Arc::new(InMemoryBlacklistStore::new());
    let token_service = Arc::new(
        TokenService::new(
            Arc::clone(&blacklist),
            TokenServiceConfig::from(&config.auth.jwt),
        )
        .context("failed to initialise the token service")?,
    );
    let user_service = Arc::new(UserService::new(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(BcryptPasswordHasher::new()),
    ));

    let sweeper = Arc::new(BlacklistSweeper::new(
        blacklist,
        BlacklistSweeperConfig::from(&config.auth.blacklist),
    ));
    let _sweeper_handle = sweeper.start_background_task();

    let app_state = web::Data::new(AppState::new(user_service, token_service));
    let cors_config = config.cors.clone();
    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || {
        create_user_app(app_state.clone())
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
