use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Lifecycle state of a series, stored as lowercase text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum MangaStatus {
    Ongoing,
    Completed,
    Hiatus,
}

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Manga {
    pub manga_id: i64,
    pub title: String,
    pub description: String,
    pub status: MangaStatus,
    pub cover_image_url: String,
    pub published_date: NaiveDateTime,
    pub last_updated: NaiveDateTime,
    /// Average of all user ratings, absent while the manga has none.
    pub rating: Option<f64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct NewManga {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: MangaStatus,
    #[serde(default)]
    pub cover_image_url: String,
}

/// Sort column whitelist for the manga listing. Anything outside the
/// whitelist falls back to the publication date rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MangaSort {
    LastUpdated,
    PublishedDate,
    Title,
    Rating,
}

impl MangaSort {
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("last_updated") => MangaSort::LastUpdated,
            Some("published_date") => MangaSort::PublishedDate,
            Some("title") => MangaSort::Title,
            Some("rating") => MangaSort::Rating,
            _ => MangaSort::PublishedDate,
        }
    }

    pub fn as_column(self) -> &'static str {
        match self {
            MangaSort::LastUpdated => "m.last_updated",
            MangaSort::PublishedDate => "m.published_date",
            MangaSort::Title => "m.title",
            MangaSort::Rating => "rating",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Only the literal "asc" selects ascending order.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("asc") => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Fully-defaulted listing parameters, ready to turn into SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MangaListParams {
    pub limit: i64,
    pub offset: i64,
    pub sort_by: MangaSort,
    pub sort_order: SortOrder,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_field_falls_back_to_published_date() {
        assert_eq!(MangaSort::from_param(Some("rating")), MangaSort::Rating);
        assert_eq!(MangaSort::from_param(Some("title")), MangaSort::Title);
        assert_eq!(MangaSort::from_param(Some("bogus")), MangaSort::PublishedDate);
        assert_eq!(MangaSort::from_param(Some("")), MangaSort::PublishedDate);
        assert_eq!(MangaSort::from_param(None), MangaSort::PublishedDate);
    }

    #[test]
    fn sort_order_is_desc_unless_asc() {
        assert_eq!(SortOrder::from_param(Some("asc")), SortOrder::Asc);
        assert_eq!(SortOrder::from_param(Some("ASC")), SortOrder::Desc);
        assert_eq!(SortOrder::from_param(Some("descending")), SortOrder::Desc);
        assert_eq!(SortOrder::from_param(None), SortOrder::Desc);
    }
}
