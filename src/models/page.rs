use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Page {
    pub page_id: i64,
    pub chapter_id: i64,
    pub page_number: i64,
    pub image_url: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct NewPage {
    pub page_number: i64,
    pub image_url: String,
}
