use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::models::{Manga, MangaListParams, NewManga};

/// Column list shared by every manga query; the rating column is the
/// average of all user ratings for the row.
const MANGA_COLUMNS: &str = "m.manga_id, m.title, m.description, m.status, m.cover_image_url, \
     m.published_date, m.last_updated, \
     (SELECT AVG(r.rating) FROM ratings r WHERE r.manga_id = m.manga_id) AS rating";

#[async_trait]
pub trait MangaRepository: Send + Sync {
    async fn list(&self, params: &MangaListParams) -> Result<Vec<Manga>, sqlx::Error>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Manga>, sqlx::Error>;
    /// Inserts a new row and returns the generated identifier.
    async fn create(&self, new: &NewManga) -> Result<i64, sqlx::Error>;
    /// Returns the number of rows touched; 0 means no such manga.
    async fn update(&self, id: i64, changes: &NewManga) -> Result<u64, sqlx::Error>;
    async fn delete(&self, id: i64) -> Result<u64, sqlx::Error>;
    async fn search_by_title(&self, text: &str) -> Result<Vec<Manga>, sqlx::Error>;
    async fn upsert_rating(
        &self,
        user_id: i64,
        manga_id: i64,
        rating: i64,
        review: Option<&str>,
    ) -> Result<(), sqlx::Error>;
    async fn favorites_of_user(&self, user_id: i64) -> Result<Vec<Manga>, sqlx::Error>;
}

#[derive(Debug, Clone)]
pub struct SqliteMangaRepository {
    pool: SqlitePool,
}

impl SqliteMangaRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MangaRepository for SqliteMangaRepository {
    async fn list(&self, params: &MangaListParams) -> Result<Vec<Manga>, sqlx::Error> {
        // Sort column and direction come from closed enums, never from
        // raw request input.
        let query = format!(
            "SELECT {MANGA_COLUMNS} FROM manga m ORDER BY {} {} LIMIT ? OFFSET ?",
            params.sort_by.as_column(),
            params.sort_order.as_sql(),
        );

        sqlx::query_as::<_, Manga>(&query)
            .bind(params.limit)
            .bind(params.offset)
            .fetch_all(&self.pool)
            .await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Manga>, sqlx::Error> {
        let query = format!("SELECT {MANGA_COLUMNS} FROM manga m WHERE m.manga_id = ?");

        sqlx::query_as::<_, Manga>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn create(&self, new: &NewManga) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO manga (title, description, status, cover_image_url) VALUES (?, ?, ?, ?)",
        )
        .bind(&new.title)
        .bind(&new.description)
        .bind(new.status)
        .bind(&new.cover_image_url)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn update(&self, id: i64, changes: &NewManga) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE manga SET title = ?, description = ?, status = ?, cover_image_url = ?, \
             last_updated = CURRENT_TIMESTAMP WHERE manga_id = ?",
        )
        .bind(&changes.title)
        .bind(&changes.description)
        .bind(changes.status)
        .bind(&changes.cover_image_url)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM manga WHERE manga_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn search_by_title(&self, text: &str) -> Result<Vec<Manga>, sqlx::Error> {
        let query = format!("SELECT {MANGA_COLUMNS} FROM manga m WHERE m.title LIKE ? ORDER BY m.title");

        sqlx::query_as::<_, Manga>(&query)
            .bind(format!("%{text}%"))
            .fetch_all(&self.pool)
            .await
    }

    async fn upsert_rating(
        &self,
        user_id: i64,
        manga_id: i64,
        rating: i64,
        review: Option<&str>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO ratings (user_id, manga_id, rating, review) VALUES (?, ?, ?, ?) \
             ON CONFLICT (user_id, manga_id) DO UPDATE SET rating = excluded.rating, review = excluded.review",
        )
        .bind(user_id)
        .bind(manga_id)
        .bind(rating)
        .bind(review)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn favorites_of_user(&self, user_id: i64) -> Result<Vec<Manga>, sqlx::Error> {
        let query = format!(
            "SELECT {MANGA_COLUMNS} FROM manga m \
             INNER JOIN favorites f ON f.manga_id = m.manga_id WHERE f.user_id = ? \
             ORDER BY m.title"
        );

        sqlx::query_as::<_, Manga>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
    }
}
