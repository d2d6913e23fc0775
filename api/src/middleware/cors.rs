//! CORS middleware configuration for cross-origin requests.
//!
//! The policy is derived from [`CorsConfig`]: development deployments accept
//! any origin, everything else is limited to the configured origin list.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use ph_shared::config::CorsConfig;

/// Creates a CORS middleware instance for the given configuration
pub fn create_cors(config: &CorsConfig) -> Cors {
    if config.allow_any_origin {
        create_development_cors(config.max_age)
    } else {
        create_production_cors(&config.allowed_origins, config.max_age)
    }
}

fn allowed_methods() -> Vec<Method> {
    vec![
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ]
}

/// Permissive policy for local front-end development
fn create_development_cors(max_age: usize) -> Cors {
    log::info!("Configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(allowed_methods())
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .expose_headers(vec![header::LOCATION])
        .max_age(max_age)
}

fn create_production_cors(allowed_origins: &[String], max_age: usize) -> Cors {
    log::info!("Configuring CORS for production environment");

    let mut cors = Cors::default()
        .allowed_methods(allowed_methods())
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .expose_headers(vec![header::LOCATION])
        .max_age(max_age);

    for origin in allowed_origins {
        log::info!("Adding allowed origin: {}", origin);
        cors = cors.allowed_origin(origin);
    }

    cors
}
