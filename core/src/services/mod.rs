//! Business services containing domain logic and use cases.

pub mod clock;
pub mod publication;
pub mod token;
pub mod user;
pub mod validation;

// Re-export commonly used types
pub use clock::{Clock, ManualClock, SystemClock};
pub use publication::PublicationService;
pub use token::{
    BlacklistSweeper, BlacklistSweeperConfig, SweepReport, TokenCodec, TokenService,
    TokenServiceConfig,
};
pub use user::{EditUser, PasswordHasher, UserService};
pub use validation::{
    subject_from_response, RemoteTokenValidator, RemoteValidationError, TokenValidationService,
};
