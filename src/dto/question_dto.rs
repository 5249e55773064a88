use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::dto::category_dto::category_map;
use crate::models::question::{NewQuestion, Question, DEFAULT_CATEGORY, DEFAULT_DIFFICULTY};
use crate::services::question_service::QuestionListing;
use crate::utils::deserializers::LenientId;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateQuestionPayload {
    #[validate(required)]
    pub question: Option<String>,
    #[validate(required)]
    pub answer: Option<String>,
    #[schema(value_type = Option<i32>, example = 1)]
    pub difficulty: Option<LenientId>,
    #[schema(value_type = Option<i32>, example = 1)]
    pub category: Option<LenientId>,
}

impl CreateQuestionPayload {
    /// Applies defaults; `None` when question or answer is missing.
    pub fn into_new_question(self) -> Option<NewQuestion> {
        Some(NewQuestion {
            question: self.question?,
            answer: self.answer?,
            category: self.category.map_or(DEFAULT_CATEGORY, |id| id.0),
            difficulty: self.difficulty.map_or(DEFAULT_DIFFICULTY, |id| id.0),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchQuestionsPayload {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub categories: BTreeMap<i32, String>,
    pub current_category: Option<BTreeMap<i32, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionCreatedResponse {
    pub success: bool,
    pub created: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionDeletedResponse {
    pub success: bool,
    pub question_deleted: i32,
}

impl From<QuestionListing> for QuestionListResponse {
    fn from(listing: QuestionListing) -> Self {
        Self {
            success: true,
            questions: listing.questions,
            total_questions: listing.total_questions,
            categories: category_map(&listing.categories),
            current_category: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_difficulty_and_category() {
        let payload: CreateQuestionPayload =
            serde_json::from_value(json!({"question": "Q?", "answer": "A"})).unwrap();
        payload.validate().unwrap();
        let new = payload.into_new_question().unwrap();
        assert_eq!(new.category, DEFAULT_CATEGORY);
        assert_eq!(new.difficulty, DEFAULT_DIFFICULTY);
    }

    #[test]
    fn accepts_string_ids_from_forms() {
        let payload: CreateQuestionPayload = serde_json::from_value(
            json!({"question": "Q?", "answer": "A", "category": "4", "difficulty": 3}),
        )
        .unwrap();
        let new = payload.into_new_question().unwrap();
        assert_eq!((new.category, new.difficulty), (4, 3));
    }

    #[test]
    fn missing_answer_fails_validation() {
        let payload: CreateQuestionPayload =
            serde_json::from_value(json!({"question": "Q?", "answer": null})).unwrap();
        assert!(payload.validate().is_err());
        assert!(payload.into_new_question().is_none());
    }

    #[test]
    fn search_term_is_read_from_camel_case_key() {
        let payload: SearchQuestionsPayload =
            serde_json::from_value(json!({"searchTerm": "title"})).unwrap();
        assert_eq!(payload.search_term, "title");
        assert!(serde_json::from_value::<SearchQuestionsPayload>(json!({"searchTerm": null})).is_err());
    }
}
