//! Question creation service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::question::{CreateQuestion, Question},
    repository::Repository,
};

#[derive(Clone)]
pub struct QuestionsService {
    repository: Repository,
}

impl QuestionsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Validate and persist exactly one new question.
    ///
    /// Validation runs before storage is touched, so malformed input surfaces
    /// as a 400 rather than a storage-layer failure.
    pub async fn create(&self, question: CreateQuestion) -> AppResult<Question> {
        question
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        self.repository.questions.insert(&question).await
    }
}
