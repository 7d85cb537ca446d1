//! User Entity
//!
//! The part of a directory row the rest of the system may see.
//! The credential secret stays inside the directory implementation.

use serde::Serialize;

use crate::domain::value_object::user_id::UserId;

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
}

impl User {
    pub fn new(id: UserId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
        }
    }
}
