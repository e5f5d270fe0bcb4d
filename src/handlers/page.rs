use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::models::{NewPage, Page};
use crate::state::AppState;
use crate::utils::response::{ApiError, ApiResponse};

#[utoipa::path(
    get,
    path = "/chapters/{chapter_id}/pages",
    params(("chapter_id" = i64, Path, description = "Chapter ID")),
    responses(
        (status = 200, description = "Pages of the chapter, ordered by page number", body = Object)
    )
)]
pub async fn list_pages(
    State(state): State<AppState>,
    Path(chapter_id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<Page>>>, ApiError> {
    let pages = state.pages.list_by_chapter(chapter_id).await?;

    Ok(Json(ApiResponse::success(pages)))
}

#[utoipa::path(
    post,
    path = "/chapters/{chapter_id}/pages",
    request_body = NewPage,
    params(("chapter_id" = i64, Path, description = "Chapter ID")),
    responses(
        (status = 201, description = "Page created", body = Object),
        (status = 409, description = "Page number already exists for this chapter")
    )
)]
pub async fn create_page(
    State(state): State<AppState>,
    Path(chapter_id): Path<i64>,
    Json(payload): Json<NewPage>,
) -> Result<(StatusCode, Json<ApiResponse<Page>>), ApiError> {
    let page_id = state.pages.create(chapter_id, &payload).await?;

    let page = Page {
        page_id,
        chapter_id,
        page_number: payload.page_number,
        image_url: payload.image_url,
    };

    Ok((StatusCode::CREATED, Json(ApiResponse::success(page))))
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePageImage {
    pub image_url: String,
}

#[utoipa::path(
    put,
    path = "/chapters/{chapter_id}/pages/{page_number}",
    request_body = UpdatePageImage,
    params(
        ("chapter_id" = i64, Path, description = "Chapter ID"),
        ("page_number" = i64, Path, description = "Page number within the chapter")
    ),
    responses(
        (status = 200, description = "Page image updated", body = Object),
        (status = 404, description = "Page not found")
    )
)]
pub async fn update_page_image(
    State(state): State<AppState>,
    Path((chapter_id, page_number)): Path<(i64, i64)>,
    Json(payload): Json<UpdatePageImage>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let updated = state
        .pages
        .update_image(chapter_id, page_number, &payload.image_url)
        .await?;
    if updated == 0 {
        return Err(ApiError::NotFound("Page not found".into()));
    }

    Ok(Json(ApiResponse::success_null()))
}
