use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::Json,
};

use crate::{
    dto::category_dto::{category_map, CategoryListResponse, CategoryQuestionsResponse},
    error::{ErrorBody, Result},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/v1/categories",
    tag = "trivia",
    responses(
        (status = 200, description = "Every category keyed by id", body = CategoryListResponse),
        (status = 404, description = "No categories stored", body = ErrorBody)
    )
)]
#[axum::debug_handler]
pub async fn list_categories(State(state): State<AppState>) -> Result<Json<CategoryListResponse>> {
    let categories = state.category_service.list().await?;
    Ok(Json(CategoryListResponse::from(categories)))
}

#[utoipa::path(
    get,
    path = "/api/v1/categories/{id}/questions",
    tag = "trivia",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Questions in the category", body = CategoryQuestionsResponse),
        (status = 404, description = "Category holds no questions", body = ErrorBody)
    )
)]
#[axum::debug_handler]
pub async fn list_questions_by_category(
    State(state): State<AppState>,
    id: std::result::Result<Path<i32>, PathRejection>,
) -> Result<Json<CategoryQuestionsResponse>> {
    let Path(id) = id?;
    let view = state.category_service.questions(id).await?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: view.questions,
        total_questions: view.total_questions,
        current_category: view
            .current_category
            .as_ref()
            .map(|category| category_map([category])),
    }))
}
