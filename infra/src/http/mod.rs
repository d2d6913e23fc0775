mod remote_validator;

pub use remote_validator::HttpTokenValidator;
