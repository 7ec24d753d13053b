//! SQLite User Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::database::is_unique_violation;
use super::DbPool;
use crate::application::ports::{RepositoryError, UserRecord, UserRepositoryPort};

/// SQLite User Repository
pub struct SqliteUserRepository {
    pool: DbPool,
}

impl SqliteUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct UserRow {
    username: String,
    password: String,
    name: String,
    token: Option<String>,
}

impl From<UserRow> for UserRecord {
    fn from(row: UserRow) -> Self {
        UserRecord {
            username: row.username,
            password: row.password,
            name: row.name,
            token: row.token,
        }
    }
}

#[async_trait]
impl UserRepositoryPort for SqliteUserRepository {
    async fn create(&self, user: &UserRecord) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO users (username, password, name, token) VALUES (?, ?, ?, ?)")
            .bind(&user.username)
            .bind(&user.password)
            .bind(&user.name)
            .bind(&user.token)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    RepositoryError::Duplicate(format!("user {}", user.username))
                } else {
                    RepositoryError::DatabaseError(e.to_string())
                }
            })?;

        Ok(())
    }

    async fn exists(&self, username: &str) -> Result<bool, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = ?")
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, RepositoryError> {
        let row: Option<UserRow> = sqlx::query_as(
            "SELECT username, password, name, token FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(row.map(UserRecord::from))
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<UserRecord>, RepositoryError> {
        let row: Option<UserRow> = sqlx::query_as(
            "SELECT username, password, name, token FROM users WHERE token = ?",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(row.map(UserRecord::from))
    }

    async fn update_profile(
        &self,
        username: &str,
        name: Option<&str>,
        password_hash: Option<&str>,
    ) -> Result<Option<UserRecord>, RepositoryError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            UPDATE users
            SET
                name = COALESCE(?, name),
                password = COALESCE(?, password)
            WHERE username = ?
            RETURNING username, password, name, token
            "#,
        )
        .bind(name)
        .bind(password_hash)
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(row.map(UserRecord::from))
    }

    async fn set_token(&self, username: &str, token: Option<&str>) -> Result<bool, RepositoryError> {
        let result = sqlx::query("UPDATE users SET token = ? WHERE username = ?")
            .bind(token)
            .bind(username)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
