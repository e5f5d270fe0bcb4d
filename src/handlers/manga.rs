use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::models::{Manga, NewManga, RatingId};
use crate::state::AppState;
use crate::utils::response::{ApiError, ApiResponse};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MangaListQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

#[utoipa::path(
    get,
    path = "/manga",
    params(MangaListQuery),
    responses(
        (status = 200, description = "Page of manga ordered per the query", body = Object)
    )
)]
pub async fn list_manga(
    State(state): State<AppState>,
    Query(query): Query<MangaListQuery>,
) -> Result<Json<ApiResponse<Vec<Manga>>>, ApiError> {
    let manga = state
        .manga
        .list(
            query.limit,
            query.offset,
            query.sort_by.as_deref(),
            query.sort_order.as_deref(),
        )
        .await?;

    Ok(Json(ApiResponse::success(manga)))
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    pub search: Option<String>,
}

#[utoipa::path(
    get,
    path = "/manga/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Manga whose title matches the search text", body = Object)
    )
)]
pub async fn search_manga(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<Vec<Manga>>>, ApiError> {
    let manga = state.manga.search(query.search.as_deref().unwrap_or("")).await?;

    Ok(Json(ApiResponse::success(manga)))
}

#[utoipa::path(
    get,
    path = "/manga/{id}",
    params(("id" = i64, Path, description = "Manga ID")),
    responses(
        (status = 200, description = "Manga details", body = Object),
        (status = 404, description = "Manga not found")
    )
)]
pub async fn get_manga(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Manga>>, ApiError> {
    let manga = state
        .manga
        .get(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Manga not found".into()))?;

    Ok(Json(ApiResponse::success(manga)))
}

#[utoipa::path(
    post,
    path = "/manga/create-manga",
    request_body = NewManga,
    responses(
        (status = 201, description = "Manga created, identifier included", body = Object)
    )
)]
pub async fn create_manga(
    State(state): State<AppState>,
    Json(payload): Json<NewManga>,
) -> Result<(StatusCode, Json<ApiResponse<Manga>>), ApiError> {
    let id = state.manga.create(&payload).await?;

    // Read the row back so the response carries the stored timestamps.
    let manga = state
        .manga
        .get(id)
        .await?
        .ok_or_else(|| ApiError::Internal("Internal server error".into()))?;

    tracing::info!(manga_id = id, "manga created");

    Ok((StatusCode::CREATED, Json(ApiResponse::success(manga))))
}

#[utoipa::path(
    put,
    path = "/manga/{id}",
    request_body = NewManga,
    params(("id" = i64, Path, description = "Manga ID")),
    responses(
        (status = 200, description = "Manga updated", body = Object),
        (status = 404, description = "Manga not found")
    )
)]
pub async fn update_manga(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<NewManga>,
) -> Result<Json<ApiResponse<Manga>>, ApiError> {
    let updated = state.manga.update(id, &payload).await?;
    if updated == 0 {
        return Err(ApiError::NotFound("Manga not found".into()));
    }

    let manga = state
        .manga
        .get(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Manga not found".into()))?;

    Ok(Json(ApiResponse::success(manga)))
}

#[utoipa::path(
    delete,
    path = "/manga/{id}",
    params(("id" = i64, Path, description = "Manga ID")),
    responses(
        (status = 200, description = "Manga deleted", body = Object),
        (status = 404, description = "Manga not found")
    )
)]
pub async fn delete_manga(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let deleted = state.manga.delete(id).await?;
    if deleted == 0 {
        return Err(ApiError::NotFound("Manga not found".into()));
    }

    Ok(Json(ApiResponse::success_null()))
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RateRequest {
    pub user_id: RatingId,
    pub manga_id: RatingId,
    pub rating: i64,
    pub review: Option<String>,
}

#[utoipa::path(
    post,
    path = "/manga/rate",
    request_body = RateRequest,
    responses(
        (status = 200, description = "Rating stored", body = Object),
        (status = 400, description = "Identifier is not a number or numeric string")
    )
)]
pub async fn rate_manga(
    State(state): State<AppState>,
    Json(payload): Json<RateRequest>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let user_id = payload
        .user_id
        .as_id()
        .ok_or_else(|| ApiError::BadRequest("Invalid user_id".into()))?;
    let manga_id = payload
        .manga_id
        .as_id()
        .ok_or_else(|| ApiError::BadRequest("Invalid manga_id".into()))?;

    state
        .manga
        .rate(user_id, manga_id, payload.rating, payload.review.as_deref())
        .await?;

    tracing::info!(user_id, manga_id, rating = payload.rating, "manga rated");

    Ok(Json(ApiResponse::success_null()))
}

#[utoipa::path(
    get,
    path = "/favorites/user/{user_id}",
    params(("user_id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "Manga favorited by the user", body = Object)
    )
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<Manga>>>, ApiError> {
    let manga = state.manga.favorites_of_user(user_id).await?;

    Ok(Json(ApiResponse::success(manga)))
}
