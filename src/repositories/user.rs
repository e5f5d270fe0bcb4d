use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::models::{NewUser, Rating, User, UserCredentials};

const USER_COLUMNS: &str = "user_id, username, email, is_admin";

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new account and returns the generated identifier.
    async fn create(&self, new: &NewUser) -> Result<i64, sqlx::Error>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, sqlx::Error>;
    /// Login path only; the returned row carries the password hash.
    async fn find_credentials(
        &self,
        username: &str,
    ) -> Result<Option<UserCredentials>, sqlx::Error>;
    async fn list_all(&self) -> Result<Vec<User>, sqlx::Error>;
    async fn delete_by_username(&self, username: &str) -> Result<u64, sqlx::Error>;
    async fn set_role(&self, username: &str, is_admin: bool) -> Result<u64, sqlx::Error>;
    async fn add_favorite(&self, user_id: i64, manga_id: i64) -> Result<(), sqlx::Error>;
    async fn remove_favorite(&self, user_id: i64, manga_id: i64) -> Result<u64, sqlx::Error>;
    async fn is_favorited(&self, user_id: i64, manga_id: i64) -> Result<bool, sqlx::Error>;
    async fn rating_for_manga(
        &self,
        user_id: i64,
        manga_id: i64,
    ) -> Result<Option<Rating>, sqlx::Error>;
}

#[derive(Debug, Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create(&self, new: &NewUser) -> Result<i64, sqlx::Error> {
        let result =
            sqlx::query("INSERT INTO users (username, email, password_hash) VALUES (?, ?, ?)")
                .bind(&new.username)
                .bind(&new.email)
                .bind(&new.password_hash)
                .execute(&self.pool)
                .await?;

        Ok(result.last_insert_rowid())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE username = ?");

        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
    }

    async fn find_credentials(
        &self,
        username: &str,
    ) -> Result<Option<UserCredentials>, sqlx::Error> {
        sqlx::query_as::<_, UserCredentials>(
            "SELECT user_id, username, email, password_hash, is_admin FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
    }

    async fn list_all(&self) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {USER_COLUMNS} FROM users ORDER BY username");

        sqlx::query_as::<_, User>(&query).fetch_all(&self.pool).await
    }

    async fn delete_by_username(&self, username: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE username = ?")
            .bind(username)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn set_role(&self, username: &str, is_admin: bool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE users SET is_admin = ? WHERE username = ?")
            .bind(is_admin)
            .bind(username)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn add_favorite(&self, user_id: i64, manga_id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO favorites (user_id, manga_id) VALUES (?, ?)")
            .bind(user_id)
            .bind(manga_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn remove_favorite(&self, user_id: i64, manga_id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM favorites WHERE user_id = ? AND manga_id = ?")
            .bind(user_id)
            .bind(manga_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn is_favorited(&self, user_id: i64, manga_id: i64) -> Result<bool, sqlx::Error> {
        let row = sqlx::query("SELECT 1 FROM favorites WHERE user_id = ? AND manga_id = ?")
            .bind(user_id)
            .bind(manga_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.is_some())
    }

    async fn rating_for_manga(
        &self,
        user_id: i64,
        manga_id: i64,
    ) -> Result<Option<Rating>, sqlx::Error> {
        sqlx::query_as::<_, Rating>(
            "SELECT user_id, manga_id, rating, review FROM ratings \
             WHERE user_id = ? AND manga_id = ?",
        )
        .bind(user_id)
        .bind(manga_id)
        .fetch_optional(&self.pool)
        .await
    }
}
