//! Users repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::user::{IdentityClaims, Role, User},
};

#[derive(Clone)]
pub struct UsersRepository {
    pool: Pool<Postgres>,
}

impl UsersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get user by provider subject id
    pub async fn get_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, role, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Upsert a user keyed by the provider subject id.
    ///
    /// Creates the record with the baseline role if absent, otherwise keeps
    /// the stored role and refreshes the email. The returned row carries the
    /// authoritative role from storage.
    pub async fn upsert(&self, claims: &IdentityClaims) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, email, role)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE
                SET email = EXCLUDED.email, updated_at = NOW()
            RETURNING id, email, role, created_at, updated_at
            "#,
        )
        .bind(&claims.subject_id)
        .bind(claims.email.clone().unwrap_or_default())
        .bind(Role::User)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }
}
