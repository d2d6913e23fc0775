//! Publication management scoped to the authenticated owner

mod service;


pub use service::PublicationService;
