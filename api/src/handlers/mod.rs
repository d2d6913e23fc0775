pub mod error;

pub use error::{
    error_response, handle_domain_error, handle_refresh_rejection, handle_validation_errors,
    missing_token,
};
