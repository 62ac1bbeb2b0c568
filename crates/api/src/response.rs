//! Wire response envelopes for API handlers.
//!
//! Every success payload carries `"success": true`; errors are produced
//! by [`crate::error::ApiError`] with `"success": false`. Typed structs
//! here replace ad-hoc `serde_json::json!` bodies so the wire shape is
//! checked at compile time.

use std::collections::BTreeMap;

use serde::Serialize;
use trivia_core::types::DbId;
use trivia_db::models::Question;

/// Category id → display label mapping, ordered by id.
pub type CategoryMap = BTreeMap<DbId, String>;

/// `GET /categories` payload.
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
    pub total_categories: i64,
}

/// Shared payload for the question listing, search, and per-category
/// listing endpoints. The category map is only present on the main
/// listing; `current_category` is always present, possibly null.
#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<CategoryMap>,
    pub current_category: Option<DbId>,
}

/// `POST /questions` payload.
#[derive(Debug, Serialize)]
pub struct CreatedQuestionResponse {
    pub success: bool,
    pub created_question_id: DbId,
}

/// `DELETE /questions/{id}` payload.
#[derive(Debug, Serialize)]
pub struct DeletedQuestionResponse {
    pub success: bool,
    pub deleted_question_id: DbId,
}

/// `POST /quizzes` payload. `question` is null once the pool is exhausted.
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}
