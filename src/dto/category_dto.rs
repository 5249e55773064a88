use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::category::Category;
use crate::models::question::Question;

/// `{id: type}` view of categories, keyed by id.
pub type CategoryMap = BTreeMap<i32, String>;

pub fn category_map<'a, I>(categories: I) -> CategoryMap
where
    I: IntoIterator<Item = &'a Category>,
{
    categories
        .into_iter()
        .map(|category| (category.id, category.kind.clone()))
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryListResponse {
    pub success: bool,
    pub total_categories: usize,
    pub categories: BTreeMap<i32, String>,
}

impl From<Vec<Category>> for CategoryListResponse {
    fn from(categories: Vec<Category>) -> Self {
        let categories = category_map(&categories);
        Self {
            success: true,
            total_categories: categories.len(),
            categories,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub current_category: Option<BTreeMap<i32, String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_matches_map_length() {
        let response = CategoryListResponse::from(vec![
            Category { id: 2, kind: "Art".into() },
            Category { id: 1, kind: "Science".into() },
        ]);
        assert_eq!(response.total_categories, response.categories.len());
        assert_eq!(response.categories.get(&2).map(String::as_str), Some("Art"));
    }

    #[test]
    fn map_serializes_with_string_keys() {
        let map = category_map(&[Category { id: 6, kind: "Sports".into() }]);
        let json = serde_json::to_value(map).unwrap();
        assert_eq!(json, serde_json::json!({"6": "Sports"}));
    }
}
