//! Conversion of domain failures into HTTP responses

use actix_web::{http::StatusCode, HttpResponse};
use validator::ValidationErrors;

use ph_core::domain::value_objects::RefreshRejection;
use ph_core::errors::{AuthError, DomainError, TokenError};
use ph_shared::errors::{error_codes, ErrorResponse};

/// Build a JSON error response with the shared error body
pub fn error_response(
    status: StatusCode,
    code: &str,
    message: impl Into<String>,
) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse::new(code, message))
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::NotFound { resource } => error_response(
            StatusCode::NOT_FOUND,
            error_codes::NOT_FOUND,
            format!("Resource not found: {}", resource),
        ),
        DomainError::Unauthorized => error_response(
            StatusCode::UNAUTHORIZED,
            error_codes::UNAUTHORIZED,
            "Authentication required",
        ),
        DomainError::Internal { message } => {
            log::error!("Internal error: {}", message);
            internal_error()
        }
        DomainError::Auth(auth_error) => handle_auth_error(auth_error),
        DomainError::Token(token_error) => handle_token_error(token_error),
        DomainError::ValidationErr(validation_error) => error_response(
            StatusCode::BAD_REQUEST,
            error_codes::VALIDATION_ERROR,
            validation_error.to_string(),
        ),
    }
}

fn handle_auth_error(error: &AuthError) -> HttpResponse {
    match error {
        AuthError::InvalidCredentials => error_response(
            StatusCode::UNAUTHORIZED,
            error_codes::UNAUTHORIZED,
            error.to_string(),
        ),
        AuthError::UserNotFound => error_response(
            StatusCode::NOT_FOUND,
            error_codes::NOT_FOUND,
            error.to_string(),
        ),
        AuthError::UserAlreadyExists => error_response(
            StatusCode::CONFLICT,
            error_codes::CONFLICT,
            "A user with this email already exists",
        ),
        AuthError::InsufficientPermissions => error_response(
            StatusCode::FORBIDDEN,
            error_codes::FORBIDDEN,
            error.to_string(),
        ),
    }
}

fn handle_token_error(error: &TokenError) -> HttpResponse {
    match error {
        TokenError::Configuration { .. } | TokenError::GenerationFailed => {
            log::error!("Token error: {}", error);
            internal_error()
        }
        _ => error_response(
            StatusCode::UNAUTHORIZED,
            error_codes::TOKEN_INVALID,
            error.to_string(),
        ),
    }
}

/// 400 response carrying the names of the rejected request fields
pub fn handle_validation_errors(errors: &ValidationErrors) -> HttpResponse {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();
    fields.sort();

    HttpResponse::BadRequest().json(
        ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request data")
            .add_detail("fields", fields),
    )
}

/// 400 response explaining why a refresh was refused
pub fn handle_refresh_rejection(rejection: &RefreshRejection) -> HttpResponse {
    if rejection.is_internal() {
        log::error!("Token refresh failed: {}", rejection);
    } else {
        log::warn!("Token refresh rejected: {}", rejection.code());
    }

    HttpResponse::BadRequest().json(
        ErrorResponse::new(error_codes::REFRESH_REJECTED, rejection.message())
            .add_detail("reason", rejection.code()),
    )
}

/// 400 response for requests without a bearer token
pub fn missing_token() -> HttpResponse {
    error_response(
        StatusCode::BAD_REQUEST,
        error_codes::MISSING_TOKEN,
        "No authorization token provided",
    )
}

fn internal_error() -> HttpResponse {
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        error_codes::INTERNAL_ERROR,
        "An internal error occurred",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ph_core::errors::ValidationError;

    #[test]
    fn test_domain_error_status_codes() {
        let cases = [
            (
                DomainError::NotFound {
                    resource: "user".to_string(),
                },
                StatusCode::NOT_FOUND,
            ),
            (AuthError::UserAlreadyExists.into(), StatusCode::CONFLICT),
            (AuthError::InsufficientPermissions.into(), StatusCode::FORBIDDEN),
            (TokenError::Expired.into(), StatusCode::UNAUTHORIZED),
            (
                TokenError::Configuration {
                    message: "empty secret".to_string(),
                }
                .into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (ValidationError::InvalidEmail.into(), StatusCode::BAD_REQUEST),
        ];

        for (error, expected) in cases {
            assert_eq!(handle_domain_error(&error).status(), expected, "{:?}", error);
        }
    }

    #[test]
    fn test_refresh_rejection_is_bad_request() {
        let response = handle_refresh_rejection(&RefreshRejection::WindowExceeded);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
