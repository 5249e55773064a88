use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::question::Question;
use crate::utils::deserializers::LenientId;

/// Category id that stands for "every category".
pub const ALL_CATEGORIES: i32 = 0;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct QuizPayload {
    #[schema(value_type = Vec<i32>)]
    pub previous_questions: Vec<LenientId>,
    pub quiz_category: QuizCategory,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct QuizCategory {
    #[schema(value_type = i32, example = 0)]
    pub id: LenientId,
}

impl QuizPayload {
    pub fn previous_ids(&self) -> Vec<i32> {
        self.previous_questions.iter().map(|id| id.0).collect()
    }

    /// `None` when the quiz spans all categories.
    pub fn category_filter(&self) -> Option<i32> {
        match self.quiz_category.id.0 {
            ALL_CATEGORIES => None,
            id => Some(id),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizQuestionResponse {
    pub success: bool,
    pub question: Question,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn category_zero_means_all() {
        let payload: QuizPayload = serde_json::from_value(json!({
            "previous_questions": [],
            "quiz_category": {"type": "click", "id": 0}
        }))
        .unwrap();
        assert_eq!(payload.category_filter(), None);
    }

    #[test]
    fn reads_string_ids() {
        let payload: QuizPayload = serde_json::from_value(json!({
            "previous_questions": [5, "9"],
            "quiz_category": {"type": "Science", "id": "1"}
        }))
        .unwrap();
        assert_eq!(payload.category_filter(), Some(1));
        assert_eq!(payload.previous_ids(), vec![5, 9]);
    }

    #[test]
    fn category_without_id_is_rejected() {
        let result = serde_json::from_value::<QuizPayload>(json!({
            "previous_questions": [],
            "quiz_category": {"type": "Science"}
        }));
        assert!(result.is_err());
    }
}
