//! Domain Layer
//!
//! Contains entities, value objects, and the user directory trait.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{identity::Identity, session::Session, user::User};
pub use repository::UserDirectory;
pub use value_object::user_id::UserId;
