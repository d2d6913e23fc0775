pub mod blacklist;
pub mod publication;
pub mod user;

pub use blacklist::{BlacklistStore, InMemoryBlacklistStore};
pub use publication::PublicationRepository;
pub use user::UserRepository;

#[cfg(test)]
pub use publication::MockPublicationRepository;
#[cfg(test)]
pub use user::MockUserRepository;
