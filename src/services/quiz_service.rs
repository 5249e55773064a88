use std::collections::HashSet;
use std::sync::Arc;

use rand::seq::IteratorRandom;
use rand::Rng;

use crate::database::TriviaRepository;
use crate::error::{Error, Result};
use crate::models::question::Question;

#[derive(Clone)]
pub struct QuizService {
    repo: Arc<dyn TriviaRepository>,
}

impl QuizService {
    pub fn new(repo: Arc<dyn TriviaRepository>) -> Self {
        Self { repo }
    }

    /// Serves a random question from `category_id` (any category when
    /// `None`) that is not among `previous`. An exhausted pool is not found.
    pub async fn next_question(
        &self,
        category_id: Option<i32>,
        previous: Vec<i32>,
    ) -> Result<Question> {
        let seen: HashSet<i32> = previous.iter().copied().collect();
        let candidates = self.repo.quiz_candidates(category_id, previous).await?;
        let pool_size = candidates.len();

        match pick_unseen(candidates, &seen, &mut rand::thread_rng()) {
            Some(question) => {
                tracing::debug!(id = question.id, pool_size, "quiz question selected");
                Ok(question)
            }
            None => {
                tracing::info!(?category_id, seen = seen.len(), "quiz candidate pool exhausted");
                Err(Error::NotFound(
                    "No more questions available for this quiz".into(),
                ))
            }
        }
    }
}

/// Uniformly picks one candidate whose id is not in `seen`.
pub fn pick_unseen<R>(candidates: Vec<Question>, seen: &HashSet<i32>, rng: &mut R) -> Option<Question>
where
    R: Rng + ?Sized,
{
    candidates
        .into_iter()
        .filter(|question| !seen.contains(&question.id))
        .choose(rng)
}
