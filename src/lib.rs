pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod telemetry;
pub mod utils;

use std::sync::Arc;

use crate::database::{PgTriviaRepository, TriviaRepository};
use crate::services::{
    category_service::CategoryService, question_service::QuestionService,
    quiz_service::QuizService,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn TriviaRepository>,
    pub category_service: CategoryService,
    pub question_service: QuestionService,
    pub quiz_service: QuizService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self::with_repository(Arc::new(PgTriviaRepository::new(pool)))
    }

    pub fn with_repository(repo: Arc<dyn TriviaRepository>) -> Self {
        let category_service = CategoryService::new(repo.clone());
        let question_service = QuestionService::new(repo.clone());
        let quiz_service = QuizService::new(repo.clone());

        Self {
            repo,
            category_service,
            question_service,
            quiz_service,
        }
    }
}
