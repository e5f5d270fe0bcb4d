use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::models::{Chapter, NewChapter, UpdateChapter};

const CHAPTER_COLUMNS: &str = "chapter_id, manga_id, chapter_number, title, release_date";

#[async_trait]
pub trait ChapterRepository: Send + Sync {
    async fn list_by_manga(&self, manga_id: i64) -> Result<Vec<Chapter>, sqlx::Error>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Chapter>, sqlx::Error>;
    async fn find_by_manga_and_number(
        &self,
        manga_id: i64,
        chapter_number: i64,
    ) -> Result<Option<Chapter>, sqlx::Error>;
    /// Inserts a new chapter and returns the generated identifier.
    async fn create(&self, manga_id: i64, new: &NewChapter) -> Result<i64, sqlx::Error>;
    async fn update(
        &self,
        manga_id: i64,
        chapter_number: i64,
        changes: &UpdateChapter,
    ) -> Result<u64, sqlx::Error>;
    async fn delete(&self, id: i64) -> Result<u64, sqlx::Error>;
}

#[derive(Debug, Clone)]
pub struct SqliteChapterRepository {
    pool: SqlitePool,
}

impl SqliteChapterRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChapterRepository for SqliteChapterRepository {
    async fn list_by_manga(&self, manga_id: i64) -> Result<Vec<Chapter>, sqlx::Error> {
        let query = format!(
            "SELECT {CHAPTER_COLUMNS} FROM chapters WHERE manga_id = ? ORDER BY chapter_number"
        );

        sqlx::query_as::<_, Chapter>(&query)
            .bind(manga_id)
            .fetch_all(&self.pool)
            .await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Chapter>, sqlx::Error> {
        let query = format!("SELECT {CHAPTER_COLUMNS} FROM chapters WHERE chapter_id = ?");

        sqlx::query_as::<_, Chapter>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn find_by_manga_and_number(
        &self,
        manga_id: i64,
        chapter_number: i64,
    ) -> Result<Option<Chapter>, sqlx::Error> {
        let query = format!(
            "SELECT {CHAPTER_COLUMNS} FROM chapters WHERE manga_id = ? AND chapter_number = ?"
        );

        sqlx::query_as::<_, Chapter>(&query)
            .bind(manga_id)
            .bind(chapter_number)
            .fetch_optional(&self.pool)
            .await
    }

    async fn create(&self, manga_id: i64, new: &NewChapter) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO chapters (manga_id, chapter_number, title, release_date) \
             VALUES (?, ?, ?, COALESCE(?, CURRENT_TIMESTAMP))",
        )
        .bind(manga_id)
        .bind(new.chapter_number)
        .bind(&new.title)
        .bind(new.release_date)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn update(
        &self,
        manga_id: i64,
        chapter_number: i64,
        changes: &UpdateChapter,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE chapters SET title = ?, release_date = COALESCE(?, release_date) \
             WHERE manga_id = ? AND chapter_number = ?",
        )
        .bind(&changes.title)
        .bind(changes.release_date)
        .bind(manga_id)
        .bind(chapter_number)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM chapters WHERE chapter_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
