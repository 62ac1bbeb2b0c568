pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// /categories                       list categories
/// /categories/{id}/questions        questions in one category (paginated)
///
/// /questions                        paginated listing, create
/// /questions/{id}                   delete
/// /questions/search                 keyword search (blank term redirects)
///
/// /quizzes                          next quiz question
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/questions", questions::router())
        .nest("/quizzes", quizzes::router())
}
