use std::sync::Arc;

use sqlx::SqlitePool;

use crate::repositories::{
    SqliteChapterRepository, SqliteMangaRepository, SqlitePageRepository, SqliteUserRepository,
};
use crate::services::{ChapterService, MangaService, PageService, UserService};

#[derive(Clone)]
pub struct AppState {
    pub manga: MangaService,
    pub chapters: ChapterService,
    pub pages: PageService,
    pub users: UserService,
}

impl AppState {
    /// Wires every service to its SQLite repository over a shared pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            manga: MangaService::new(Arc::new(SqliteMangaRepository::new(pool.clone()))),
            chapters: ChapterService::new(Arc::new(SqliteChapterRepository::new(pool.clone()))),
            pages: PageService::new(Arc::new(SqlitePageRepository::new(pool.clone()))),
            users: UserService::new(Arc::new(SqliteUserRepository::new(pool))),
        }
    }
}
