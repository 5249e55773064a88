use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use serde_json::Value;

use crate::{
    dto::quiz_dto::{QuizPayload, QuizQuestionResponse},
    error::{Error, ErrorBody, Result},
    utils::body::require_object,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/v1/quizzes",
    tag = "trivia",
    request_body = QuizPayload,
    responses(
        (status = 200, description = "A question not served before", body = QuizQuestionResponse),
        (status = 400, description = "previous_questions or quiz_category missing", body = ErrorBody),
        (status = 404, description = "Every candidate has been served", body = ErrorBody)
    )
)]
#[axum::debug_handler]
pub async fn next_quiz_question(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<QuizQuestionResponse>> {
    let body = require_object(payload)?;
    let quiz: QuizPayload = serde_json::from_value(Value::Object(body))
        .map_err(|e| Error::BadRequest(format!("quiz request: {}", e)))?;

    let question = state
        .quiz_service
        .next_question(quiz.category_filter(), quiz.previous_ids())
        .await?;

    Ok(Json(QuizQuestionResponse {
        success: true,
        question,
    }))
}
