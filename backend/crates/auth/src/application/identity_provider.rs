//! Identity Provider
//!
//! Turns the user id bound to a session back into a [`User`].

use std::sync::Arc;

use crate::application::session_store::SessionHandle;
use crate::domain::entity::identity::Identity;
use crate::domain::repository::UserDirectory;

pub struct IdentityProvider<D>
where
    D: UserDirectory,
{
    directory: Arc<D>,
}

impl<D> IdentityProvider<D>
where
    D: UserDirectory,
{
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }

    /// Current identity of the session. Never fails.
    ///
    /// A bound id the directory no longer knows, or a directory error while
    /// re-loading it, leaves the request anonymous.
    pub async fn current_identity(&self, session: &SessionHandle) -> Identity {
        let Some(user_id) = session.with(|s| s.user_id()) else {
            return Identity::Anonymous;
        };

        match self.directory.find_by_id(user_id).await {
            Ok(Some(user)) => Identity::Authenticated(user),
            Ok(None) => {
                tracing::warn!(user_id = %user_id, "Session bound to unknown user");
                Identity::Anonymous
            }
            Err(e) => {
                tracing::warn!(user_id = %user_id, error = %e, "Failed to load session user");
                Identity::Anonymous
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::session::Session;
    use crate::domain::value_object::user_id::UserId;
    use crate::infra::memory::MemoryUserDirectory;

    #[tokio::test]
    async fn test_empty_session_is_anonymous() {
        let provider = IdentityProvider::new(Arc::new(MemoryUserDirectory::new()));
        let identity = provider.current_identity(&SessionHandle::default()).await;
        assert!(identity.is_anonymous());
    }

    #[tokio::test]
    async fn test_bound_session_loads_user() {
        let directory = MemoryUserDirectory::new();
        let id = directory.insert("testuser", "password");
        let provider = IdentityProvider::new(Arc::new(directory));

        let mut session = Session::new();
        session.bind_user(id).unwrap();

        let identity = provider.current_identity(&SessionHandle::new(session)).await;
        assert_eq!(identity.user().map(|u| u.username.as_str()), Some("testuser"));
    }

    #[tokio::test]
    async fn test_unknown_user_is_anonymous() {
        let provider = IdentityProvider::new(Arc::new(MemoryUserDirectory::new()));

        let mut session = Session::new();
        session.bind_user(UserId::new(404)).unwrap();

        let identity = provider.current_identity(&SessionHandle::new(session)).await;
        assert!(identity.is_anonymous());
    }

    #[tokio::test]
    async fn test_directory_outage_is_anonymous() {
        let directory = MemoryUserDirectory::new();
        let id = directory.insert("testuser", "password");
        directory.set_unavailable(true);
        let provider = IdentityProvider::new(Arc::new(directory));

        let mut session = Session::new();
        session.bind_user(id).unwrap();

        let identity = provider.current_identity(&SessionHandle::new(session)).await;
        assert!(identity.is_anonymous());
    }
}
