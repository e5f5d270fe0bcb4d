use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mangam API",
        description = "REST backend for the Mangam manga catalog and reading tracker.",
        version = "1.0.0"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        handlers::manga::list_manga,
        handlers::manga::search_manga,
        handlers::manga::get_manga,
        handlers::manga::create_manga,
        handlers::manga::update_manga,
        handlers::manga::delete_manga,
        handlers::manga::rate_manga,
        handlers::manga::get_user_favorites,
        handlers::chapter::list_chapters,
        handlers::chapter::get_chapter,
        handlers::chapter::get_chapter_by_number,
        handlers::chapter::create_chapter,
        handlers::chapter::update_chapter,
        handlers::chapter::delete_chapter,
        handlers::page::list_pages,
        handlers::page::create_page,
        handlers::page::update_page_image,
        handlers::user::create_user,
        handlers::user::login,
        handlers::user::list_users,
        handlers::user::get_user,
        handlers::user::delete_user,
        handlers::user::change_role,
        handlers::user::add_favorite,
        handlers::user::remove_favorite,
        handlers::user::check_favorite,
        handlers::user::get_user_rating,
    ),
    components(
        schemas(
            models::Manga,
            models::MangaStatus,
            models::NewManga,
            models::Chapter,
            models::NewChapter,
            models::UpdateChapter,
            models::Page,
            models::NewPage,
            models::User,
            models::Rating,
            handlers::manga::RateRequest,
            handlers::page::UpdatePageImage,
            handlers::user::CreateUser,
            handlers::user::LoginRequest,
            handlers::user::RoleRequest,
            handlers::user::FavoriteRequest,
            handlers::user::FavoriteStatus,
        )
    )
)]
pub struct ApiDoc;
