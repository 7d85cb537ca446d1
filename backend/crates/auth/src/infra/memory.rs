//! In-process User Directory
//!
//! Backs tests and database-less local runs.

use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::entity::user::User;
use crate::domain::repository::UserDirectory;
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

#[derive(Debug, Clone)]
struct UserRecord {
    user: User,
    secret: String,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryUserDirectory {
    records: Arc<RwLock<Vec<UserRecord>>>,
    unavailable: Arc<AtomicBool>,
}

impl MemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a user and return its id. Ids start at 1, like the `users` table.
    pub fn insert(&self, username: &str, secret: &str) -> UserId {
        let mut records = self.records.write();
        let id = UserId::new(records.len() as i64 + 1);
        records.push(UserRecord {
            user: User::new(id, username),
            secret: secret.to_string(),
        });
        id
    }

    /// Make every lookup fail as if the directory were unreachable
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> AuthResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AuthError::DirectoryUnavailable(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

impl UserDirectory for MemoryUserDirectory {
    async fn find_by_credentials(
        &self,
        username: &str,
        secret: &str,
    ) -> AuthResult<Option<User>> {
        self.check_available()?;

        let records = self.records.read();
        let mut matches = records
            .iter()
            .filter(|r| r.user.username == username && r.secret == secret);

        match (matches.next(), matches.next()) {
            (Some(record), None) => Ok(Some(record.user.clone())),
            _ => Ok(None),
        }
    }

    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>> {
        self.check_available()?;

        Ok(self
            .records
            .read()
            .iter()
            .find(|r| r.user.id == user_id)
            .map(|r| r.user.clone()))
    }
}
