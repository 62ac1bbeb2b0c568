//! Handler for quiz play: draw the next unseen question.

use std::collections::HashSet;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use trivia_core::quiz::{self, CategoryFilter};
use trivia_core::types::DbId;
use trivia_db::models::Question;
use trivia_db::repositories::QuestionRepo;

use crate::error::{ApiError, ApiResult};
use crate::response::QuizResponse;
use crate::state::AppState;

/// Request body for `POST /quizzes`.
///
/// Session state travels in the request: `previous_questions` holds the
/// ids already shown. The category label also travels on the wire but
/// only the id matters server-side.
#[derive(Debug, Deserialize)]
pub struct QuizBody {
    #[serde(default)]
    pub previous_questions: Vec<DbId>,
    pub quiz_category: Option<QuizCategoryBody>,
}

#[derive(Debug, Deserialize)]
pub struct QuizCategoryBody {
    pub id: DbId,
}

/// POST /quizzes
///
/// Resolves the pool from the category (id 0 means all categories),
/// removes previously-seen ids, and draws one survivor uniformly at
/// random. An exhausted pool returns `question: null` with a 200 --
/// that is the normal end of a quiz session, not an error.
pub async fn next_quiz_question(
    State(state): State<AppState>,
    body: Result<Json<QuizBody>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(body) = body.map_err(|e| ApiError::BadRequest(format!("invalid quiz body: {e}")))?;

    let category = body
        .quiz_category
        .ok_or_else(|| ApiError::BadRequest("quiz_category is required".into()))?;
    let category_filter = CategoryFilter::from_id(category.id);

    let all = QuestionRepo::list_all(&state.pool).await?;
    let pool: Vec<Question> = all
        .into_iter()
        .filter(|q| category_filter.matches(q.category))
        .collect();

    let excluded: HashSet<DbId> = body.previous_questions.iter().copied().collect();

    let question = quiz::select_next(&pool, &excluded, &mut rand::rng()).cloned();

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
