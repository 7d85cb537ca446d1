//! Repository Traits
//!
//! The user directory is an external collaborator. Implementations live in
//! the infrastructure layer.

use crate::domain::entity::user::User;
use crate::domain::value_object::user_id::UserId;
use crate::error::AuthResult;

/// User directory trait
///
/// Reads only. Calls are independent and may run concurrently from many
/// requests; implementations own any timeout policy.
#[trait_variant::make(UserDirectory: Send)]
pub trait LocalUserDirectory {
    /// Find the single user whose username and secret both equal the
    /// submitted values. Zero or several matching rows yield `None`.
    async fn find_by_credentials(&self, username: &str, secret: &str)
    -> AuthResult<Option<User>>;

    /// Re-load a user previously bound to a session
    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>>;
}
