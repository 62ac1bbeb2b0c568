//! Handlers for category listing and per-category question listing.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use trivia_core::error::CoreError;
use trivia_core::types::DbId;
use trivia_core::{filter, pagination};
use trivia_db::models::{Category, Question};
use trivia_db::repositories::{CategoryRepo, QuestionRepo};

use crate::error::{ApiError, ApiResult};
use crate::query::PageParams;
use crate::response::{CategoriesResponse, CategoryMap, QuestionListResponse};
use crate::state::AppState;

/// Build the `{id: type}` mapping from an id-ordered category list.
pub(crate) fn category_map(categories: &[Category]) -> CategoryMap {
    categories.iter().map(|c| (c.id, c.kind.clone())).collect()
}

/// GET /categories
///
/// All categories as an `{id: type}` mapping. An empty category table
/// is a 404, matching the observed behavior of the original service.
pub async fn list_categories(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let categories = CategoryRepo::list_all(&state.pool).await?;

    if categories.is_empty() {
        return Err(ApiError::NotFound("no categories exist".into()));
    }

    let total_categories = categories.len() as i64;

    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(&categories),
        total_categories,
    }))
}

/// GET /categories/{id}/questions?page=N
///
/// Questions belonging to one category, paginated. An unknown category
/// id is a 422; an empty page is a 200 with an empty list, unlike
/// `/questions` (kept as-is, see DESIGN.md).
pub async fn list_category_questions(
    State(state): State<AppState>,
    Path(category_id): Path<DbId>,
    Query(params): Query<PageParams>,
) -> ApiResult<impl IntoResponse> {
    let category = CategoryRepo::find_by_id(&state.pool, category_id).await?;
    if category.is_none() {
        return Err(ApiError::Core(CoreError::Unprocessable(format!(
            "category {category_id} does not exist"
        ))));
    }

    let all = QuestionRepo::list_all(&state.pool).await?;
    let in_category = filter::by_category(&all, category_id);
    let total_questions = in_category.len() as i64;

    let questions: Vec<Question> = pagination::paginate(&in_category, params.page())
        .iter()
        .map(|q| (*q).clone())
        .collect();

    Ok(Json(QuestionListResponse {
        success: true,
        questions,
        total_questions,
        categories: None,
        current_category: Some(category_id),
    }))
}
