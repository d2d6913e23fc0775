//! User account management: registration, login and profile edits

mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use service::{EditUser, UserService};
pub use traits::PasswordHasher;
