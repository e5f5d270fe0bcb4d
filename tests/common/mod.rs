#![allow(dead_code)]

use std::str::FromStr;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use mangam_api::{routes, state::AppState};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Router plus pool over a single-connection in-memory database, so
/// every request and every direct query see the same schema.
pub async fn setup() -> (Router, SqlitePool) {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();
    sqlx::migrate!("./migrations").run(&pool).await.unwrap();

    let app = routes::router(AppState::new(pool.clone()));
    (app, pool)
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

    (status, json)
}

/// Extracts the `data` member of the response envelope.
pub fn data(body: &serde_json::Value) -> &serde_json::Value {
    &body["data"]
}

pub async fn seed_manga(pool: &SqlitePool, title: &str, published: &str, updated: &str) -> i64 {
    sqlx::query(
        "INSERT INTO manga (title, description, status, cover_image_url, published_date, last_updated) \
         VALUES (?, '', 'ongoing', '', ?, ?)",
    )
    .bind(title)
    .bind(published)
    .bind(updated)
    .execute(pool)
    .await
    .unwrap()
    .last_insert_rowid()
}

pub async fn seed_user(pool: &SqlitePool, username: &str) -> i64 {
    sqlx::query("INSERT INTO users (username, email, password_hash) VALUES (?, '', 'seed-hash')")
        .bind(username)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn seed_chapter(pool: &SqlitePool, manga_id: i64, number: i64, title: &str) -> i64 {
    sqlx::query("INSERT INTO chapters (manga_id, chapter_number, title) VALUES (?, ?, ?)")
        .bind(manga_id)
        .bind(number)
        .bind(title)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}
