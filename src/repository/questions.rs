//! Questions repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::question::{CreateQuestion, Question},
};

#[derive(Clone)]
pub struct QuestionsRepository {
    pool: Pool<Postgres>,
}

impl QuestionsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert a new question and return the stored row, id included
    pub async fn insert(&self, question: &CreateQuestion) -> AppResult<Question> {
        let created = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (
                id, exam_id, year_asked, topic, subtopic, question_text,
                option_a, option_b, option_c, option_d, correct_answer, solution
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING id, exam_id, year_asked, topic, subtopic, question_text,
                      option_a, option_b, option_c, option_d, correct_answer,
                      solution, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&question.exam_id)
        .bind(question.year_asked)
        .bind(&question.topic)
        .bind(&question.subtopic)
        .bind(&question.question_text)
        .bind(&question.option_a)
        .bind(&question.option_b)
        .bind(&question.option_c)
        .bind(&question.option_d)
        .bind(question.correct_answer)
        .bind(&question.solution)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }
}
