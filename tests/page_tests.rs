mod common;

use axum::http::StatusCode;
use common::{data, seed_chapter, seed_manga, send, setup};
use serde_json::json;

async fn chapter_fixture(pool: &sqlx::SqlitePool) -> i64 {
    let manga = seed_manga(pool, "Series", "2020-01-01 00:00:00", "2020-01-01 00:00:00").await;
    seed_chapter(pool, manga, 1, "First").await
}

#[tokio::test]
async fn pages_are_listed_in_page_number_order() {
    let (app, pool) = setup().await;
    let chapter = chapter_fixture(&pool).await;

    for (number, url) in [(2, "http://img/2.png"), (1, "http://img/1.png")] {
        let (status, _) = send(
            &app,
            "POST",
            &format!("/chapters/{chapter}/pages"),
            Some(json!({"page_number": number, "image_url": url})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, "GET", &format!("/chapters/{chapter}/pages"), None).await;

    assert_eq!(status, StatusCode::OK);
    let numbers: Vec<i64> = data(&body)
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["page_number"].as_i64().unwrap())
        .collect();
    assert_eq!(numbers, vec![1, 2]);
}

#[tokio::test]
async fn create_page_returns_generated_id() {
    let (app, pool) = setup().await;
    let chapter = chapter_fixture(&pool).await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/chapters/{chapter}/pages"),
        Some(json!({"page_number": 1, "image_url": "http://img/1.png"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(data(&body)["page_id"].as_i64().unwrap() > 0);
    assert_eq!(data(&body)["chapter_id"].as_i64().unwrap(), chapter);
}

#[tokio::test]
async fn duplicate_page_number_is_conflict() {
    let (app, pool) = setup().await;
    let chapter = chapter_fixture(&pool).await;

    let body = json!({"page_number": 1, "image_url": "http://img/1.png"});
    let (status, _) = send(&app, "POST", &format!("/chapters/{chapter}/pages"), Some(body.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(&app, "POST", &format!("/chapters/{chapter}/pages"), Some(body)).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn update_page_image_replaces_url() {
    let (app, pool) = setup().await;
    let chapter = chapter_fixture(&pool).await;

    let (status, _) = send(
        &app,
        "POST",
        &format!("/chapters/{chapter}/pages"),
        Some(json!({"page_number": 1, "image_url": "http://img/old.png"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/chapters/{chapter}/pages/1"),
        Some(json!({"image_url": "http://img/new.png"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "GET", &format!("/chapters/{chapter}/pages"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(data(&body)[0]["image_url"], "http://img/new.png");
}

#[tokio::test]
async fn update_missing_page_is_404() {
    let (app, pool) = setup().await;
    let chapter = chapter_fixture(&pool).await;

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/chapters/{chapter}/pages/5"),
        Some(json!({"image_url": "http://img/5.png"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
