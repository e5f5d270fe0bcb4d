use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Chapter {
    pub chapter_id: i64,
    pub manga_id: i64,
    pub chapter_number: i64,
    pub title: String,
    pub release_date: NaiveDateTime,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct NewChapter {
    pub chapter_number: i64,
    #[serde(default)]
    pub title: String,
    pub release_date: Option<NaiveDateTime>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateChapter {
    pub title: String,
    pub release_date: Option<NaiveDateTime>,
}
