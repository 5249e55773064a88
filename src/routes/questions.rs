use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::Json,
};
use serde_json::Value;
use validator::Validate;

use crate::{
    dto::question_dto::{
        CreateQuestionPayload, QuestionCreatedResponse, QuestionDeletedResponse,
        QuestionListResponse, SearchQuestionsPayload,
    },
    error::{Error, ErrorBody, Result},
    utils::{body::require_object, pagination::PageQuery},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/v1/questions",
    tag = "trivia",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of questions", body = QuestionListResponse),
        (status = 404, description = "Page holds no questions", body = ErrorBody)
    )
)]
#[axum::debug_handler]
pub async fn list_questions(
    State(state): State<AppState>,
    query: std::result::Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<QuestionListResponse>> {
    // A query string that fails to deserialize (e.g. a repeated `page`) reads as page 1.
    let query = query.map(|Query(query)| query).unwrap_or_default();
    let listing = state.question_service.page(query.page()).await?;
    Ok(Json(QuestionListResponse::from(listing)))
}

#[utoipa::path(
    post,
    path = "/api/v1/questions",
    tag = "trivia",
    request_body = CreateQuestionPayload,
    responses(
        (status = 200, description = "Question stored", body = QuestionCreatedResponse),
        (status = 400, description = "Missing request body", body = ErrorBody),
        (status = 422, description = "Question or answer missing, or insert failed", body = ErrorBody)
    )
)]
#[axum::debug_handler]
pub async fn create_question(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<QuestionCreatedResponse>> {
    let body = require_object(payload)?;
    let payload: CreateQuestionPayload = serde_json::from_value(Value::Object(body))?;
    payload.validate()?;

    let new_question = payload
        .into_new_question()
        .ok_or_else(|| Error::Unprocessable("question and answer are required".into()))?;
    let created = state.question_service.create(new_question).await?;

    Ok(Json(QuestionCreatedResponse {
        success: true,
        created: created.id,
    }))
}

#[utoipa::path(
    post,
    path = "/api/v1/questions/search",
    tag = "trivia",
    request_body = SearchQuestionsPayload,
    responses(
        (status = 200, description = "Questions containing the term", body = QuestionListResponse),
        (status = 400, description = "No search term given", body = ErrorBody),
        (status = 404, description = "Nothing matched", body = ErrorBody)
    )
)]
#[axum::debug_handler]
pub async fn search_questions(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<QuestionListResponse>> {
    let body = require_object(payload)?;
    let SearchQuestionsPayload { search_term } = serde_json::from_value(Value::Object(body))
        .map_err(|e| Error::BadRequest(format!("searchTerm: {}", e)))?;

    let listing = state.question_service.search(&search_term).await?;
    Ok(Json(QuestionListResponse::from(listing)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/questions/{id}",
    tag = "trivia",
    params(
        ("id" = i32, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question removed", body = QuestionDeletedResponse),
        (status = 404, description = "Question not found", body = ErrorBody),
        (status = 422, description = "Delete failed", body = ErrorBody)
    )
)]
#[axum::debug_handler]
pub async fn delete_question(
    State(state): State<AppState>,
    id: std::result::Result<Path<i32>, PathRejection>,
) -> Result<Json<QuestionDeletedResponse>> {
    let Path(id) = id?;
    let deleted = state.question_service.delete(id).await?;

    Ok(Json(QuestionDeletedResponse {
        success: true,
        question_deleted: deleted,
    }))
}
