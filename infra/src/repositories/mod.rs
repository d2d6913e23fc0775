//! In-process repository implementations
//!
//! State lives for the lifetime of the process; both services are designed
//! so that a database-backed implementation can replace these behind the
//! same traits.

mod publication;
mod user;

pub use publication::InMemoryPublicationRepository;
pub use user::InMemoryUserRepository;
