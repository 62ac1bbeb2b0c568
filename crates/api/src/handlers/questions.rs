//! Handlers for question listing, creation, deletion, and search.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use trivia_core::error::CoreError;
use trivia_core::types::DbId;
use trivia_core::{filter, pagination};
use trivia_db::models::{CreateQuestion, Question};
use trivia_db::repositories::{CategoryRepo, QuestionRepo};

use crate::error::{ApiError, ApiResult};
use crate::handlers::categories::category_map;
use crate::query::PageParams;
use crate::response::{CreatedQuestionResponse, DeletedQuestionResponse, QuestionListResponse};
use crate::state::AppState;

/// GET /questions?page=N
///
/// One fixed-size page of the full id-ordered question list, plus the
/// category mapping for the sidebar. An out-of-range page is a 404
/// (decided here, not in the pagination engine).
pub async fn list_questions(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> ApiResult<impl IntoResponse> {
    let all = QuestionRepo::list_all(&state.pool).await?;
    let page = pagination::paginate(&all, params.page());

    if page.is_empty() {
        return Err(ApiError::NotFound(format!(
            "question page {} is empty",
            params.page()
        )));
    }

    let categories = CategoryRepo::list_all(&state.pool).await?;

    Ok(Json(QuestionListResponse {
        success: true,
        questions: page.to_vec(),
        total_questions: all.len() as i64,
        categories: Some(category_map(&categories)),
        current_category: None,
    }))
}

/// Request body for `POST /questions`. Fields are optional at the serde
/// level so missing and empty values can both be reported as a 400.
#[derive(Debug, Deserialize)]
pub struct CreateQuestionBody {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<DbId>,
    pub difficulty: Option<i32>,
}

/// POST /questions
///
/// All four fields are required and non-empty. The referenced category
/// must exist (referential integrity is enforced on create).
pub async fn create_question(
    State(state): State<AppState>,
    body: Result<Json<CreateQuestionBody>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(body) =
        body.map_err(|e| ApiError::BadRequest(format!("invalid question body: {e}")))?;

    let input = validate_create(body)?;

    if CategoryRepo::find_by_id(&state.pool, input.category).await?.is_none() {
        return Err(ApiError::Core(CoreError::Validation(format!(
            "category {} does not exist",
            input.category
        ))));
    }

    let created = QuestionRepo::insert(&state.pool, &input).await?;

    tracing::info!(question_id = created.id, category = created.category, "Question created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedQuestionResponse {
            success: true,
            created_question_id: created.id,
        }),
    ))
}

/// Check presence and non-emptiness of every field of the create body.
fn validate_create(body: CreateQuestionBody) -> ApiResult<CreateQuestion> {
    let question = require_text("question", body.question)?;
    let answer = require_text("answer", body.answer)?;

    let category = body
        .category
        .filter(|&id| id > 0)
        .ok_or_else(|| CoreError::Validation("category is required".into()))?;
    let difficulty = body
        .difficulty
        .filter(|&d| d > 0)
        .ok_or_else(|| CoreError::Validation("difficulty is required".into()))?;

    Ok(CreateQuestion {
        question,
        answer,
        category,
        difficulty,
    })
}

fn require_text(field: &str, value: Option<String>) -> Result<String, CoreError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| CoreError::Validation(format!("{field} must be a non-empty string")))
}

/// DELETE /questions/{id}
pub async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> ApiResult<impl IntoResponse> {
    let deleted = QuestionRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(ApiError::Core(CoreError::NotFound {
            entity: "Question",
            id,
        }));
    }

    tracing::info!(question_id = id, "Question deleted");

    Ok(Json(DeletedQuestionResponse {
        success: true,
        deleted_question_id: id,
    }))
}

/// Request body for `POST /questions/search`. The key is optional so a
/// missing `searchTerm` can be distinguished from a blank one.
#[derive(Debug, Deserialize)]
pub struct SearchBody {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// POST /questions/search?page=N
///
/// Case-insensitive substring search over question text. A missing
/// `searchTerm` key is a 400; a blank term redirects (302) to the
/// unfiltered listing rather than matching everything.
pub async fn search_questions(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
    body: Result<Json<SearchBody>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(body) = body.map_err(|e| ApiError::BadRequest(format!("invalid search body: {e}")))?;

    let raw = body
        .search_term
        .ok_or_else(|| ApiError::BadRequest("searchTerm key is missing".into()))?;

    let Some(term) = filter::normalize_term(&raw) else {
        return Ok((StatusCode::FOUND, [(header::LOCATION, "/questions")]).into_response());
    };

    let all = QuestionRepo::list_all(&state.pool).await?;
    let matches = filter::by_search_term(&all, term);
    let total_questions = matches.len() as i64;

    let questions: Vec<Question> = pagination::paginate(&matches, params.page())
        .iter()
        .map(|q| (*q).clone())
        .collect();

    Ok(Json(QuestionListResponse {
        success: true,
        questions,
        total_questions,
        categories: None,
        current_category: None,
    })
    .into_response())
}
