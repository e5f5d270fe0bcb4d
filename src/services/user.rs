use std::sync::Arc;

use crate::models::{NewUser, Rating, User, UserCredentials};
use crate::repositories::UserRepository;

/// Pure delegation; credential hashing and verification live at the
/// handler boundary.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, new: &NewUser) -> Result<i64, sqlx::Error> {
        self.repo.create(new).await
    }

    pub async fn get_by_username(&self, username: &str) -> Result<Option<User>, sqlx::Error> {
        self.repo.find_by_username(username).await
    }

    pub async fn get_credentials(
        &self,
        username: &str,
    ) -> Result<Option<UserCredentials>, sqlx::Error> {
        self.repo.find_credentials(username).await
    }

    pub async fn list_all(&self) -> Result<Vec<User>, sqlx::Error> {
        self.repo.list_all().await
    }

    pub async fn delete_by_username(&self, username: &str) -> Result<u64, sqlx::Error> {
        self.repo.delete_by_username(username).await
    }

    pub async fn set_role(&self, username: &str, is_admin: bool) -> Result<u64, sqlx::Error> {
        self.repo.set_role(username, is_admin).await
    }

    pub async fn add_favorite(&self, user_id: i64, manga_id: i64) -> Result<(), sqlx::Error> {
        self.repo.add_favorite(user_id, manga_id).await
    }

    pub async fn remove_favorite(&self, user_id: i64, manga_id: i64) -> Result<u64, sqlx::Error> {
        self.repo.remove_favorite(user_id, manga_id).await
    }

    pub async fn is_favorited(&self, user_id: i64, manga_id: i64) -> Result<bool, sqlx::Error> {
        self.repo.is_favorited(user_id, manga_id).await
    }

    pub async fn rating_for_manga(
        &self,
        user_id: i64,
        manga_id: i64,
    ) -> Result<Option<Rating>, sqlx::Error> {
        self.repo.rating_for_manga(user_id, manga_id).await
    }
}
