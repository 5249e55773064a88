use std::sync::Arc;

use crate::database::TriviaRepository;
use crate::error::{Error, Result};
use crate::models::category::Category;
use crate::models::question::Question;

#[derive(Clone)]
pub struct CategoryService {
    repo: Arc<dyn TriviaRepository>,
}

pub struct CategoryQuestions {
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub current_category: Option<Category>,
}

impl CategoryService {
    pub fn new(repo: Arc<dyn TriviaRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Category>> {
        let categories = self.repo.list_categories().await?;
        if categories.is_empty() {
            return Err(Error::NotFound("No categories available".into()));
        }
        Ok(categories)
    }

    /// Questions filed under `category_id`. `total_questions` counts every
    /// stored question, not just this category.
    pub async fn questions(&self, category_id: i32) -> Result<CategoryQuestions> {
        let questions = self.repo.questions_in_category(category_id).await?;
        if questions.is_empty() {
            return Err(Error::NotFound(format!(
                "No questions in category {}",
                category_id
            )));
        }

        let total_questions = self.repo.count_questions().await?;
        let current_category = self.repo.find_category(category_id).await?;
        if current_category.is_none() {
            tracing::warn!(category_id, "questions reference a category that does not exist");
        }

        Ok(CategoryQuestions {
            questions,
            total_questions,
            current_category,
        })
    }
}
