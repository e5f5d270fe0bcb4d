use std::sync::Arc;

use crate::models::{NewPage, Page};
use crate::repositories::PageRepository;

#[derive(Clone)]
pub struct PageService {
    repo: Arc<dyn PageRepository>,
}

impl PageService {
    pub fn new(repo: Arc<dyn PageRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_by_chapter(&self, chapter_id: i64) -> Result<Vec<Page>, sqlx::Error> {
        self.repo.list_by_chapter(chapter_id).await
    }

    pub async fn create(&self, chapter_id: i64, new: &NewPage) -> Result<i64, sqlx::Error> {
        self.repo.create(chapter_id, new).await
    }

    pub async fn update_image(
        &self,
        chapter_id: i64,
        page_number: i64,
        image_url: &str,
    ) -> Result<u64, sqlx::Error> {
        self.repo.update_image(chapter_id, page_number, image_url).await
    }
}
