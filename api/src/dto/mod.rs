pub mod publication;
pub mod user;

pub use publication::{CreatePublicationRequest, PublicationResponse};
pub use user::{
    EditUserRequest, LoginRequest, LogoutResponse, RegisterRequest, TokenResponse,
    UserResponse, ValidateTokenResponse,
};
pub use ph_shared::errors::ErrorResponse;
