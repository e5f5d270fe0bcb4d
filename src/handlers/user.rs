use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{NewUser, Rating, User};
use crate::state::AppState;
use crate::utils::response::{ApiError, ApiResponse};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUser {
    pub username: String,
    #[serde(default)]
    pub email: String,
    pub password: String,
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "Account created", body = Object),
        (status = 409, description = "Username already taken")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUser>,
) -> Result<(StatusCode, Json<ApiResponse<User>>), ApiError> {
    if payload.username.is_empty() || payload.password.is_empty() {
        return Err(ApiError::BadRequest("Username and password are required".into()));
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(payload.password.as_bytes(), &salt)
        .map_err(|_| ApiError::Internal("Internal server error".into()))?
        .to_string();

    let new = NewUser {
        username: payload.username,
        email: payload.email,
        password_hash,
    };
    let user_id = state.users.create(&new).await?;

    tracing::info!(user_id, username = %new.username, "user registered");

    let user = User {
        user_id,
        username: new.username,
        email: new.email,
        is_admin: false,
    };

    Ok((StatusCode::CREATED, Json(ApiResponse::success(user))))
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[utoipa::path(
    post,
    path = "/users/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted", body = Object),
        (status = 401, description = "Unknown username or wrong password")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    // The same response for an unknown user and a wrong password.
    let credentials = state
        .users
        .get_credentials(&payload.username)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Invalid username or password".into()))?;

    let parsed_hash = PasswordHash::new(&credentials.password_hash)
        .map_err(|_| ApiError::Internal("Internal server error".into()))?;

    if Argon2::default()
        .verify_password(payload.password.as_bytes(), &parsed_hash)
        .is_err()
    {
        return Err(ApiError::Unauthorized("Invalid username or password".into()));
    }

    Ok(Json(ApiResponse::success(credentials.into_user())))
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All accounts", body = Object)
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<User>>>, ApiError> {
    let users = state.users.list_all().await?;

    Ok(Json(ApiResponse::success(users)))
}

#[utoipa::path(
    get,
    path = "/users/{username}",
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "Account details", body = Object),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = state
        .users
        .get_by_username(&username)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;

    Ok(Json(ApiResponse::success(user)))
}

#[utoipa::path(
    delete,
    path = "/users/{username}",
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "Account deleted", body = Object),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let deleted = state.users.delete_by_username(&username).await?;
    if deleted == 0 {
        return Err(ApiError::NotFound("User not found".into()));
    }

    Ok(Json(ApiResponse::success_null()))
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RoleRequest {
    pub is_admin: bool,
}

#[utoipa::path(
    patch,
    path = "/users/{username}/role",
    request_body = RoleRequest,
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "Role changed", body = Object),
        (status = 404, description = "User not found")
    )
)]
pub async fn change_role(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(payload): Json<RoleRequest>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let updated = state.users.set_role(&username, payload.is_admin).await?;
    if updated == 0 {
        return Err(ApiError::NotFound("User not found".into()));
    }

    tracing::info!(username = %username, is_admin = payload.is_admin, "role changed");

    Ok(Json(ApiResponse::success_null()))
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct FavoriteRequest {
    pub user_id: i64,
    pub manga_id: i64,
}

#[utoipa::path(
    post,
    path = "/favorites",
    request_body = FavoriteRequest,
    responses(
        (status = 201, description = "Favourite added", body = Object),
        (status = 409, description = "Already favorited")
    )
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    Json(payload): Json<FavoriteRequest>,
) -> Result<(StatusCode, Json<ApiResponse<()>>), ApiError> {
    state
        .users
        .add_favorite(payload.user_id, payload.manga_id)
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success_null())))
}

#[utoipa::path(
    delete,
    path = "/favorites/user/{user_id}/manga/{manga_id}",
    params(
        ("user_id" = i64, Path, description = "User ID"),
        ("manga_id" = i64, Path, description = "Manga ID")
    ),
    responses(
        (status = 200, description = "Favourite removed", body = Object),
        (status = 404, description = "Favourite not found")
    )
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    Path((user_id, manga_id)): Path<(i64, i64)>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let removed = state.users.remove_favorite(user_id, manga_id).await?;
    if removed == 0 {
        return Err(ApiError::NotFound("Favourite not found".into()));
    }

    Ok(Json(ApiResponse::success_null()))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FavoriteStatus {
    pub favorited: bool,
}

#[utoipa::path(
    get,
    path = "/favorites/user/{user_id}/manga/{manga_id}",
    params(
        ("user_id" = i64, Path, description = "User ID"),
        ("manga_id" = i64, Path, description = "Manga ID")
    ),
    responses(
        (status = 200, description = "Favourite membership", body = Object)
    )
)]
pub async fn check_favorite(
    State(state): State<AppState>,
    Path((user_id, manga_id)): Path<(i64, i64)>,
) -> Result<Json<ApiResponse<FavoriteStatus>>, ApiError> {
    let favorited = state.users.is_favorited(user_id, manga_id).await?;

    Ok(Json(ApiResponse::success(FavoriteStatus { favorited })))
}

#[utoipa::path(
    get,
    path = "/ratings/user/{user_id}/manga/{manga_id}",
    params(
        ("user_id" = i64, Path, description = "User ID"),
        ("manga_id" = i64, Path, description = "Manga ID")
    ),
    responses(
        (status = 200, description = "The user's rating for the manga", body = Object),
        (status = 404, description = "No rating recorded")
    )
)]
pub async fn get_user_rating(
    State(state): State<AppState>,
    Path((user_id, manga_id)): Path<(i64, i64)>,
) -> Result<Json<ApiResponse<Rating>>, ApiError> {
    let rating = state
        .users
        .rating_for_manga(user_id, manga_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Rating not found".into()))?;

    Ok(Json(ApiResponse::success(rating)))
}
