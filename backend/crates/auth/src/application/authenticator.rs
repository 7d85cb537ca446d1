//! Authenticator
//!
//! Signs a session in against the user directory, and signs it out.
//!
//! The secret is compared by plain equality in the directory query; the
//! `users` table stores it as entered.

use std::sync::Arc;

use crate::application::session_store::SessionHandle;
use crate::domain::entity::user::User;
use crate::domain::repository::UserDirectory;
use crate::error::{AuthError, AuthResult};

pub struct Authenticator<D>
where
    D: UserDirectory,
{
    directory: Arc<D>,
}

impl<D> Authenticator<D>
where
    D: UserDirectory,
{
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }

    /// Verify credentials and bind the matched user to the session
    ///
    /// The session is only touched after the lookup has returned, so a
    /// request dropped mid-lookup leaves it as it was.
    pub async fn login(
        &self,
        session: &SessionHandle,
        username: &str,
        secret: &str,
    ) -> AuthResult<User> {
        let user = self
            .directory
            .find_by_credentials(username, secret)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        session
            .with(|s| s.bind_user(user.id))
            .map_err(|e| AuthError::SessionBindFailure(e.to_string()))?;

        tracing::info!(user_id = %user.id, username = %user.username, "User signed in");

        Ok(user)
    }

    /// Unbind the session's user. Signing out an anonymous session is a no-op.
    pub fn logout(&self, session: &SessionHandle) {
        let user_id = session.with(|s| {
            let user_id = s.user_id();
            s.unbind_user();
            user_id
        });

        if let Some(user_id) = user_id {
            tracing::info!(user_id = %user_id, "User signed out");
        }
    }
}
