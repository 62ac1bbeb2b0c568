//! Repository for the `questions` table.
//!
//! The store exposes ordered listing, lookup, insert, and delete only.
//! Pagination, category filtering, and search run in `trivia-core` over
//! the fetched, id-ordered collection.

use sqlx::PgPool;
use trivia_core::types::DbId;

use crate::models::question::{CreateQuestion, Question};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, question, answer, category, difficulty";

/// CRUD operations for questions. Questions have no update operation.
pub struct QuestionRepo;

impl QuestionRepo {
    /// List all questions in ascending id order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions ORDER BY id");
        sqlx::query_as::<_, Question>(&query).fetch_all(pool).await
    }

    /// Find a question by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE id = $1");
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new question, returning the created row.
    pub async fn insert(pool: &PgPool, input: &CreateQuestion) -> Result<Question, sqlx::Error> {
        let query = format!(
            "INSERT INTO questions (question, answer, category, difficulty)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(input.category)
            .bind(input.difficulty)
            .fetch_one(pool)
            .await
    }

    /// Delete a question by id. Returns `false` if no row existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of questions.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(pool)
            .await
    }
}
