use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Rating {
    pub user_id: i64,
    pub manga_id: i64,
    pub rating: i64,
    pub review: Option<String>,
}

/// Identifier field of a rating request. Clients send `user_id` and
/// `manga_id` either as JSON numbers or as numeric strings; every other
/// JSON type is captured by `Other` and rejected during coercion.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum RatingId {
    Int(i64),
    Float(f64),
    Text(String),
    #[schema(value_type = Object)]
    Other(serde_json::Value),
}

impl RatingId {
    /// Total coercion to an integer id; `None` means the value is not
    /// representable and the request is invalid.
    pub fn as_id(&self) -> Option<i64> {
        match self {
            RatingId::Int(v) => Some(*v),
            RatingId::Float(v) => Some(*v as i64),
            RatingId::Text(s) => s.trim().parse().ok(),
            RatingId::Other(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(value: serde_json::Value) -> RatingId {
        serde_json::from_value(value).expect("RatingId accepts any JSON value")
    }

    #[test]
    fn numbers_and_numeric_strings_coerce() {
        assert_eq!(parse(serde_json::json!(7)).as_id(), Some(7));
        assert_eq!(parse(serde_json::json!(7.9)).as_id(), Some(7));
        assert_eq!(parse(serde_json::json!("12")).as_id(), Some(12));
        assert_eq!(parse(serde_json::json!(" 12 ")).as_id(), Some(12));
    }

    #[test]
    fn other_json_types_are_rejected() {
        assert_eq!(parse(serde_json::json!("twelve")).as_id(), None);
        assert_eq!(parse(serde_json::json!(true)).as_id(), None);
        assert_eq!(parse(serde_json::json!(null)).as_id(), None);
        assert_eq!(parse(serde_json::json!([1])).as_id(), None);
        assert_eq!(parse(serde_json::json!({"id": 1})).as_id(), None);
    }

    #[test]
    fn number_and_string_forms_agree() {
        assert_eq!(
            parse(serde_json::json!(42)).as_id(),
            parse(serde_json::json!("42")).as_id(),
        );
    }
}
