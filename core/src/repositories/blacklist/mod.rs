pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod memory;

pub use memory::InMemoryBlacklistStore;
pub use r#trait::BlacklistStore;

#[cfg(test)]
mod tests;
