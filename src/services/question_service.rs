use std::sync::Arc;

use crate::database::TriviaRepository;
use crate::error::{Error, Result};
use crate::models::category::Category;
use crate::models::question::{NewQuestion, Question};
use crate::utils::pagination::{paginate, QUESTIONS_PER_PAGE};

#[derive(Clone)]
pub struct QuestionService {
    repo: Arc<dyn TriviaRepository>,
}

/// A slice of questions together with the context every listing carries.
pub struct QuestionListing {
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub categories: Vec<Category>,
}

impl QuestionService {
    pub fn new(repo: Arc<dyn TriviaRepository>) -> Self {
        Self { repo }
    }

    pub async fn page(&self, page: i64) -> Result<QuestionListing> {
        let all = self.repo.list_questions().await?;
        let total_questions = all.len() as i64;

        let questions = paginate(all, page, QUESTIONS_PER_PAGE);
        if questions.is_empty() {
            return Err(Error::NotFound(format!("Page {} is empty", page)));
        }

        let categories = self.repo.list_categories().await?;
        Ok(QuestionListing {
            questions,
            total_questions,
            categories,
        })
    }

    pub async fn search(&self, term: &str) -> Result<QuestionListing> {
        let questions = self.repo.search_questions(term.to_string()).await?;
        if questions.is_empty() {
            return Err(Error::NotFound(format!("No questions match '{}'", term)));
        }

        let categories = self.repo.list_categories().await?;
        Ok(QuestionListing {
            total_questions: questions.len() as i64,
            questions,
            categories,
        })
    }

    pub async fn create(&self, question: NewQuestion) -> Result<Question> {
        let created = self
            .repo
            .insert_question(question)
            .await
            .map_err(Error::into_unprocessable)?;

        tracing::info!(id = created.id, category = created.category, "question created");
        Ok(created)
    }

    pub async fn delete(&self, id: i32) -> Result<i32> {
        if self.repo.find_question(id).await?.is_none() {
            return Err(Error::NotFound(format!("There is no question with id {}", id)));
        }

        let removed = self
            .repo
            .delete_question(id)
            .await
            .map_err(Error::into_unprocessable)?;
        if removed == 0 {
            return Err(Error::NotFound(format!("Question {} was already deleted", id)));
        }

        tracing::info!(id, "question deleted");
        Ok(id)
    }
}
