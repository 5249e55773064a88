use axum::{
    http::StatusCode,
    response::Response,
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::error::envelope;
use crate::middleware::cors::{api_cors, json_content_type};
use crate::AppState;

pub mod categories;
pub mod docs;
pub mod health;
pub mod questions;
pub mod quizzes;


pub const API_PREFIX: &str = "/api/v1";

/// Full application router: the versioned API plus health and fallback.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/categories", get(categories::list_categories))
        .route(
            "/categories/:id/questions",
            get(categories::list_questions_by_category),
        )
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/questions/search", post(questions::search_questions))
        .route("/questions/:id", delete(questions::delete_question))
        .route("/quizzes", post(quizzes::next_quiz_question))
        .route("/openapi.json", get(docs::openapi_json))
        .layer(api_cors());

    Router::new()
        .route("/health", get(health::health))
        .nest(API_PREFIX, api)
        .fallback(not_found)
        .with_state(state)
        .layer(json_content_type())
        .layer(TraceLayer::new_for_http())
}

async fn not_found() -> Response {
    envelope(StatusCode::NOT_FOUND)
}
