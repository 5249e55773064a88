use axum::Json;
use utoipa::OpenApi;

use super::{categories, health, questions, quizzes};
use crate::dto::category_dto::{CategoryListResponse, CategoryQuestionsResponse};
use crate::dto::question_dto::{
    CreateQuestionPayload, QuestionCreatedResponse, QuestionDeletedResponse,
    QuestionListResponse, SearchQuestionsPayload,
};
use crate::dto::quiz_dto::{QuizCategory, QuizPayload, QuizQuestionResponse};
use crate::error::ErrorBody;
use crate::models::category::Category;
use crate::models::question::Question;

#[derive(OpenApi)]
#[openapi(
    paths(
        categories::list_categories,
        categories::list_questions_by_category,
        questions::list_questions,
        questions::create_question,
        questions::search_questions,
        questions::delete_question,
        quizzes::next_quiz_question,
        health::health,
    ),
    components(schemas(
        Question,
        Category,
        CategoryListResponse,
        CategoryQuestionsResponse,
        QuestionListResponse,
        QuestionCreatedResponse,
        QuestionDeletedResponse,
        CreateQuestionPayload,
        SearchQuestionsPayload,
        QuizPayload,
        QuizCategory,
        QuizQuestionResponse,
        ErrorBody,
    )),
    tags(
        (name = "trivia", description = "Trivia questions, categories and quizzes")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
