//! PostgreSQL User Directory

use sqlx::PgPool;

use crate::domain::entity::user::User;
use crate::domain::repository::UserDirectory;
use crate::domain::value_object::user_id::UserId;
use crate::error::AuthResult;

/// PostgreSQL-backed user directory over the `users` table
#[derive(Clone)]
pub struct PgUserDirectory {
    pool: PgPool,
}

impl PgUserDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Round-trip to the database. Used at startup to fail fast.
    pub async fn ping(&self) -> AuthResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Insert a user unless the username is already taken
    pub async fn ensure_user(&self, username: &str, secret: &str) -> AuthResult<UserId> {
        sqlx::query(
            r#"
            INSERT INTO users (username, password)
            VALUES ($1, $2)
            ON CONFLICT (username) DO NOTHING
            "#,
        )
        .bind(username)
        .bind(secret)
        .execute(&self.pool)
        .await?;

        let id: i64 = sqlx::query_scalar("SELECT id FROM users WHERE username = $1")
            .bind(username)
            .fetch_one(&self.pool)
            .await?;

        Ok(UserId::new(id))
    }
}

impl UserDirectory for PgUserDirectory {
    async fn find_by_credentials(
        &self,
        username: &str,
        secret: &str,
    ) -> AuthResult<Option<User>> {
        // LIMIT 2 is enough to tell "exactly one" from "several"
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username
            FROM users
            WHERE username = $1 AND password = $2
            LIMIT 2
            "#,
        )
        .bind(username)
        .bind(secret)
        .fetch_all(&self.pool)
        .await?;

        if rows.len() > 1 {
            tracing::warn!(username = %username, "Credentials match more than one user");
            return Ok(None);
        }

        Ok(rows.into_iter().next().map(UserRow::into_user))
    }

    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserRow::into_user))
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
}

impl UserRow {
    fn into_user(self) -> User {
        User::new(UserId::new(self.id), self.username)
    }
}
