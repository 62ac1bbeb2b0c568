//! Question entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use trivia_core::types::DbId;
use trivia_core::QuestionLike;

/// A question row from the `questions` table.
///
/// Serializes to the wire shape `{id, question, answer, category,
/// difficulty}` used by every listing endpoint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    pub category: DbId,
    pub difficulty: i32,
}

impl QuestionLike for Question {
    fn id(&self) -> DbId {
        self.id
    }

    fn category_id(&self) -> DbId {
        self.category
    }

    fn prompt(&self) -> &str {
        &self.question
    }
}

/// DTO for inserting a new question. All fields are required and
/// already validated by the handler.
#[derive(Debug, Clone)]
pub struct CreateQuestion {
    pub question: String,
    pub answer: String,
    pub category: DbId,
    pub difficulty: i32,
}
