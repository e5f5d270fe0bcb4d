use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Public view of an account. The password hash never leaves the
/// credentials type below, so it cannot end up in a response body.
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
}

/// Row used only by the login path.
#[derive(Debug, FromRow)]
pub struct UserCredentials {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
}

impl UserCredentials {
    pub fn into_user(self) -> User {
        User {
            user_id: self.user_id,
            username: self.username,
            email: self.email,
            is_admin: self.is_admin,
        }
    }
}

#[derive(Debug, ToSchema)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}
