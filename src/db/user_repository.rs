// src/db/user_repository.rs
// DOCUMENTATION: Database access layer for users and bearer tokens
// PURPOSE: Abstract database operations from business logic

use crate::errors::StoreError;
use crate::models::User;
use sqlx::PgPool;
use uuid::Uuid;

/// UserRepository: All database operations for users and tokens
pub struct UserRepository;

impl UserRepository {
    /// Fetch user by username
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, StoreError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, is_superuser, date_joined
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(pool)
        .await
        .map_err(|e| StoreError::from_db("user", e))
    }

    /// Create the superuser account if no account with that username exists
    /// DOCUMENTATION: Idempotent by design - running the bootstrap twice with
    /// the same credentials leaves exactly one account.
    /// Returns true when a new account was created.
    pub async fn ensure_superuser(
        pool: &PgPool,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<bool, StoreError> {
        let rows = sqlx::query(
            r#"
            INSERT INTO users (id, username, email, password_hash, is_superuser)
            VALUES ($1, $2, $3, $4, TRUE)
            ON CONFLICT (username) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .execute(pool)
        .await
        .map_err(|e| StoreError::from_db(&format!("user {}", username), e))?
        .rows_affected();

        Ok(rows > 0)
    }

    /// Resolve a bearer token key to its user
    pub async fn find_by_token(pool: &PgPool, key: &str) -> Result<Option<User>, StoreError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT u.id, u.username, u.email, u.password_hash, u.is_superuser, u.date_joined
            FROM users u
            JOIN auth_tokens t ON t.user_id = u.id
            WHERE t.key = $1
            "#,
        )
        .bind(key)
        .fetch_optional(pool)
        .await
        .map_err(|e| StoreError::from_db("token", e))
    }

    /// Get the user's token, creating one on first use
    /// DOCUMENTATION: One token per user; a concurrent first login races on
    /// the unique user_id constraint and both callers end up with the same key
    pub async fn get_or_create_token(
        pool: &PgPool,
        user_id: Uuid,
        new_key: &str,
    ) -> Result<String, StoreError> {
        if let Some(key) = Self::token_for(pool, user_id).await? {
            return Ok(key);
        }

        sqlx::query(
            r#"
            INSERT INTO auth_tokens (key, user_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id) DO NOTHING
            "#,
        )
        .bind(new_key)
        .bind(user_id)
        .execute(pool)
        .await
        .map_err(|e| StoreError::from_db("token", e))?;

        Self::token_for(pool, user_id)
            .await?
            .ok_or_else(|| StoreError::DatabaseError("token creation failed".to_string()))
    }

    async fn token_for(pool: &PgPool, user_id: Uuid) -> Result<Option<String>, StoreError> {
        let key: Option<(String,)> =
            sqlx::query_as("SELECT key FROM auth_tokens WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(pool)
                .await
                .map_err(|e| StoreError::from_db("token", e))?;

        Ok(key.map(|k| k.0))
    }
}
