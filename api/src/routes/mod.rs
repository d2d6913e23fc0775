pub mod publications;
pub mod users;
