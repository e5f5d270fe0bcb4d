use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::models::{Chapter, NewChapter, UpdateChapter};
use crate::state::AppState;
use crate::utils::response::{ApiError, ApiResponse};

#[utoipa::path(
    get,
    path = "/manga/{id}/chapters",
    params(("id" = i64, Path, description = "Manga ID")),
    responses(
        (status = 200, description = "Chapters of the manga, ordered by chapter number", body = Object)
    )
)]
pub async fn list_chapters(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<Chapter>>>, ApiError> {
    let chapters = state.chapters.list_by_manga(id).await?;

    Ok(Json(ApiResponse::success(chapters)))
}

#[utoipa::path(
    get,
    path = "/manga/chapters/{id}",
    params(("id" = i64, Path, description = "Chapter ID")),
    responses(
        (status = 200, description = "Chapter details", body = Object),
        (status = 404, description = "Chapter not found")
    )
)]
pub async fn get_chapter(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Chapter>>, ApiError> {
    let chapter = state
        .chapters
        .get(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Chapter not found".into()))?;

    Ok(Json(ApiResponse::success(chapter)))
}

#[utoipa::path(
    get,
    path = "/manga/{manga_id}/chapters/{chapter_number}",
    params(
        ("manga_id" = i64, Path, description = "Manga ID"),
        ("chapter_number" = i64, Path, description = "Chapter number within the manga")
    ),
    responses(
        (status = 200, description = "Chapter details", body = Object),
        (status = 404, description = "Chapter not found")
    )
)]
pub async fn get_chapter_by_number(
    State(state): State<AppState>,
    Path((manga_id, chapter_number)): Path<(i64, i64)>,
) -> Result<Json<ApiResponse<Chapter>>, ApiError> {
    let chapter = state
        .chapters
        .get_by_number(manga_id, chapter_number)
        .await?
        .ok_or_else(|| ApiError::NotFound("Chapter not found".into()))?;

    Ok(Json(ApiResponse::success(chapter)))
}

#[utoipa::path(
    post,
    path = "/manga/{id}/chapters/create-chapter",
    request_body = NewChapter,
    params(("id" = i64, Path, description = "Manga ID")),
    responses(
        (status = 201, description = "Chapter created, identifier included", body = Object),
        (status = 409, description = "Chapter number already exists for this manga")
    )
)]
pub async fn create_chapter(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<NewChapter>,
) -> Result<(StatusCode, Json<ApiResponse<Chapter>>), ApiError> {
    let chapter_id = state.chapters.create(id, &payload).await?;

    let chapter = state
        .chapters
        .get(chapter_id)
        .await?
        .ok_or_else(|| ApiError::Internal("Internal server error".into()))?;

    tracing::info!(chapter_id, manga_id = id, "chapter created");

    Ok((StatusCode::CREATED, Json(ApiResponse::success(chapter))))
}

#[utoipa::path(
    put,
    path = "/manga/{manga_id}/chapters/{chapter_number}",
    request_body = UpdateChapter,
    params(
        ("manga_id" = i64, Path, description = "Manga ID"),
        ("chapter_number" = i64, Path, description = "Chapter number within the manga")
    ),
    responses(
        (status = 200, description = "Chapter updated", body = Object),
        (status = 404, description = "Chapter not found")
    )
)]
pub async fn update_chapter(
    State(state): State<AppState>,
    Path((manga_id, chapter_number)): Path<(i64, i64)>,
    Json(payload): Json<UpdateChapter>,
) -> Result<Json<ApiResponse<Chapter>>, ApiError> {
    let updated = state
        .chapters
        .update(manga_id, chapter_number, &payload)
        .await?;
    if updated == 0 {
        return Err(ApiError::NotFound("Chapter not found".into()));
    }

    let chapter = state
        .chapters
        .get_by_number(manga_id, chapter_number)
        .await?
        .ok_or_else(|| ApiError::NotFound("Chapter not found".into()))?;

    Ok(Json(ApiResponse::success(chapter)))
}

#[utoipa::path(
    delete,
    path = "/chapters/{chapter_id}",
    params(("chapter_id" = i64, Path, description = "Chapter ID")),
    responses(
        (status = 200, description = "Chapter deleted", body = Object),
        (status = 404, description = "Chapter not found")
    )
)]
pub async fn delete_chapter(
    State(state): State<AppState>,
    Path(chapter_id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let deleted = state.chapters.delete(chapter_id).await?;
    if deleted == 0 {
        return Err(ApiError::NotFound("Chapter not found".into()));
    }

    Ok(Json(ApiResponse::success_null()))
}
