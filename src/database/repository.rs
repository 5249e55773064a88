use async_trait::async_trait;

use crate::error::Result;
use crate::models::category::Category;
use crate::models::question::{NewQuestion, Question};

/// Storage seam for questions and categories.
///
/// Every listing is ordered: questions by id ascending, categories by their
/// display type ascending.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TriviaRepository: Send + Sync + 'static {
    async fn ping(&self) -> Result<()>;

    async fn list_categories(&self) -> Result<Vec<Category>>;

    async fn find_category(&self, id: i32) -> Result<Option<Category>>;

    async fn list_questions(&self) -> Result<Vec<Question>>;

    async fn count_questions(&self) -> Result<i64>;

    async fn find_question(&self, id: i32) -> Result<Option<Question>>;

    async fn questions_in_category(&self, category_id: i32) -> Result<Vec<Question>>;

    /// Case-insensitive substring match on the question text.
    async fn search_questions(&self, term: String) -> Result<Vec<Question>>;

    async fn insert_question(&self, question: NewQuestion) -> Result<Question>;

    /// Returns the number of rows removed.
    async fn delete_question(&self, id: i32) -> Result<u64>;

    /// Questions in `category_id` (all categories when `None`) whose id is not
    /// in `exclude`.
    async fn quiz_candidates(
        &self,
        category_id: Option<i32>,
        exclude: Vec<i32>,
    ) -> Result<Vec<Question>>;
}
