use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::models::{NewPage, Page};

#[async_trait]
pub trait PageRepository: Send + Sync {
    async fn list_by_chapter(&self, chapter_id: i64) -> Result<Vec<Page>, sqlx::Error>;
    /// Inserts a page keyed by (chapter, page number) and returns the
    /// generated identifier.
    async fn create(&self, chapter_id: i64, new: &NewPage) -> Result<i64, sqlx::Error>;
    /// Sets the image URL for an existing (chapter, page number) pair.
    async fn update_image(
        &self,
        chapter_id: i64,
        page_number: i64,
        image_url: &str,
    ) -> Result<u64, sqlx::Error>;
}

#[derive(Debug, Clone)]
pub struct SqlitePageRepository {
    pool: SqlitePool,
}

impl SqlitePageRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PageRepository for SqlitePageRepository {
    async fn list_by_chapter(&self, chapter_id: i64) -> Result<Vec<Page>, sqlx::Error> {
        sqlx::query_as::<_, Page>(
            "SELECT page_id, chapter_id, page_number, image_url FROM pages \
             WHERE chapter_id = ? ORDER BY page_number",
        )
        .bind(chapter_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn create(&self, chapter_id: i64, new: &NewPage) -> Result<i64, sqlx::Error> {
        let result =
            sqlx::query("INSERT INTO pages (chapter_id, page_number, image_url) VALUES (?, ?, ?)")
                .bind(chapter_id)
                .bind(new.page_number)
                .bind(&new.image_url)
                .execute(&self.pool)
                .await?;

        Ok(result.last_insert_rowid())
    }

    async fn update_image(
        &self,
        chapter_id: i64,
        page_number: i64,
        image_url: &str,
    ) -> Result<u64, sqlx::Error> {
        let result =
            sqlx::query("UPDATE pages SET image_url = ? WHERE chapter_id = ? AND page_number = ?")
                .bind(image_url)
                .bind(chapter_id)
                .bind(page_number)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected())
    }
}
