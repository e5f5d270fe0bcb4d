use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers;
use crate::state::AppState;

/// Full HTTP surface. Static segments win over parameters at the same
/// position, so `/manga/search` and `/manga/chapters/{id}` coexist with
/// `/manga/{id}`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/manga",
            get(handlers::manga::list_manga),
        )
        .route("/manga/search", get(handlers::manga::search_manga))
        .route("/manga/rate", post(handlers::manga::rate_manga))
        .route("/manga/create-manga", post(handlers::manga::create_manga))
        .route(
            "/manga/{id}",
            get(handlers::manga::get_manga)
                .put(handlers::manga::update_manga)
                .delete(handlers::manga::delete_manga),
        )
        .route("/manga/{id}/chapters", get(handlers::chapter::list_chapters))
        .route(
            "/manga/{id}/chapters/create-chapter",
            post(handlers::chapter::create_chapter),
        )
        .route("/manga/chapters/{id}", get(handlers::chapter::get_chapter))
        // Same `{id}` name as the other /manga routes; the router rejects
        // differently-named parameters at the same position.
        .route(
            "/manga/{id}/chapters/{chapter_number}",
            get(handlers::chapter::get_chapter_by_number).put(handlers::chapter::update_chapter),
        )
        .route("/chapters/{chapter_id}", delete(handlers::chapter::delete_chapter))
        .route(
            "/chapters/{chapter_id}/pages",
            get(handlers::page::list_pages).post(handlers::page::create_page),
        )
        .route(
            "/chapters/{chapter_id}/pages/{page_number}",
            put(handlers::page::update_page_image),
        )
        .route(
            "/users",
            get(handlers::user::list_users).post(handlers::user::create_user),
        )
        .route("/users/login", post(handlers::user::login))
        .route(
            "/users/{username}",
            get(handlers::user::get_user).delete(handlers::user::delete_user),
        )
        .route("/users/{username}/role", patch(handlers::user::change_role))
        .route("/favorites", post(handlers::user::add_favorite))
        .route(
            "/favorites/user/{user_id}",
            get(handlers::manga::get_user_favorites),
        )
        .route(
            "/favorites/user/{user_id}/manga/{manga_id}",
            get(handlers::user::check_favorite).delete(handlers::user::remove_favorite),
        )
        .route(
            "/ratings/user/{user_id}/manga/{manga_id}",
            get(handlers::user::get_user_rating),
        )
        .with_state(state)
}
