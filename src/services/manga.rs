use std::sync::Arc;

use crate::models::{Manga, MangaListParams, MangaSort, NewManga, SortOrder};
use crate::repositories::MangaRepository;

const DEFAULT_LIMIT: i64 = 10;

/// Pass-through over the manga repository. The listing path is the one
/// place with real logic: raw query parameters are normalized here so
/// the repository only ever sees whitelisted, defaulted values.
#[derive(Clone)]
pub struct MangaService {
    repo: Arc<dyn MangaRepository>,
}

impl MangaService {
    pub fn new(repo: Arc<dyn MangaRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(
        &self,
        limit: Option<i64>,
        offset: Option<i64>,
        sort_by: Option<&str>,
        sort_order: Option<&str>,
    ) -> Result<Vec<Manga>, sqlx::Error> {
        let params = MangaListParams {
            limit: limit.unwrap_or(DEFAULT_LIMIT),
            offset: offset.unwrap_or(0),
            sort_by: MangaSort::from_param(sort_by),
            sort_order: SortOrder::from_param(sort_order),
        };

        self.repo.list(&params).await
    }

    pub async fn get(&self, id: i64) -> Result<Option<Manga>, sqlx::Error> {
        self.repo.find_by_id(id).await
    }

    pub async fn create(&self, new: &NewManga) -> Result<i64, sqlx::Error> {
        self.repo.create(new).await
    }

    pub async fn update(&self, id: i64, changes: &NewManga) -> Result<u64, sqlx::Error> {
        self.repo.update(id, changes).await
    }

    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        self.repo.delete(id).await
    }

    pub async fn search(&self, text: &str) -> Result<Vec<Manga>, sqlx::Error> {
        self.repo.search_by_title(text).await
    }

    pub async fn rate(
        &self,
        user_id: i64,
        manga_id: i64,
        rating: i64,
        review: Option<&str>,
    ) -> Result<(), sqlx::Error> {
        self.repo.upsert_rating(user_id, manga_id, rating, review).await
    }

    pub async fn favorites_of_user(&self, user_id: i64) -> Result<Vec<Manga>, sqlx::Error> {
        self.repo.favorites_of_user(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    /// Records the listing parameters the service hands down.
    #[derive(Default)]
    struct RecordingRepo {
        seen: Mutex<Vec<MangaListParams>>,
    }

    #[async_trait]
    impl MangaRepository for RecordingRepo {
        async fn list(&self, params: &MangaListParams) -> Result<Vec<Manga>, sqlx::Error> {
            self.seen.lock().unwrap().push(*params);
            Ok(Vec::new())
        }

        async fn find_by_id(&self, _id: i64) -> Result<Option<Manga>, sqlx::Error> {
            Ok(None)
        }

        async fn create(&self, _new: &NewManga) -> Result<i64, sqlx::Error> {
            Ok(1)
        }

        async fn update(&self, _id: i64, _changes: &NewManga) -> Result<u64, sqlx::Error> {
            Ok(0)
        }

        async fn delete(&self, _id: i64) -> Result<u64, sqlx::Error> {
            Ok(0)
        }

        async fn search_by_title(&self, _text: &str) -> Result<Vec<Manga>, sqlx::Error> {
            Ok(Vec::new())
        }

        async fn upsert_rating(
            &self,
            _user_id: i64,
            _manga_id: i64,
            _rating: i64,
            _review: Option<&str>,
        ) -> Result<(), sqlx::Error> {
            Ok(())
        }

        async fn favorites_of_user(&self, _user_id: i64) -> Result<Vec<Manga>, sqlx::Error> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn list_applies_defaults() {
        let repo = Arc::new(RecordingRepo::default());
        let service = MangaService::new(repo.clone());

        service.list(None, None, None, None).await.unwrap();

        let seen = repo.seen.lock().unwrap();
        assert_eq!(
            seen[0],
            MangaListParams {
                limit: 10,
                offset: 0,
                sort_by: MangaSort::PublishedDate,
                sort_order: SortOrder::Desc,
            }
        );
    }

    #[tokio::test]
    async fn list_normalizes_unknown_sort_params() {
        let repo = Arc::new(RecordingRepo::default());
        let service = MangaService::new(repo.clone());

        service
            .list(Some(5), Some(20), Some("popularity"), Some("sideways"))
            .await
            .unwrap();

        let seen = repo.seen.lock().unwrap();
        assert_eq!(
            seen[0],
            MangaListParams {
                limit: 5,
                offset: 20,
                sort_by: MangaSort::PublishedDate,
                sort_order: SortOrder::Desc,
            }
        );
    }
}
