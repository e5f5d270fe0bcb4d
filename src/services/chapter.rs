use std::sync::Arc;

use crate::models::{Chapter, NewChapter, UpdateChapter};
use crate::repositories::ChapterRepository;

#[derive(Clone)]
pub struct ChapterService {
    repo: Arc<dyn ChapterRepository>,
}

impl ChapterService {
    pub fn new(repo: Arc<dyn ChapterRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_by_manga(&self, manga_id: i64) -> Result<Vec<Chapter>, sqlx::Error> {
        self.repo.list_by_manga(manga_id).await
    }

    pub async fn get(&self, id: i64) -> Result<Option<Chapter>, sqlx::Error> {
        self.repo.find_by_id(id).await
    }

    pub async fn get_by_number(
        &self,
        manga_id: i64,
        chapter_number: i64,
    ) -> Result<Option<Chapter>, sqlx::Error> {
        self.repo.find_by_manga_and_number(manga_id, chapter_number).await
    }

    pub async fn create(&self, manga_id: i64, new: &NewChapter) -> Result<i64, sqlx::Error> {
        self.repo.create(manga_id, new).await
    }

    pub async fn update(
        &self,
        manga_id: i64,
        chapter_number: i64,
        changes: &UpdateChapter,
    ) -> Result<u64, sqlx::Error> {
        self.repo.update(manga_id, chapter_number, changes).await
    }

    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        self.repo.delete(id).await
    }
}
