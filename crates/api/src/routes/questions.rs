//! Route definitions for questions, mounted at `/questions`.
//!
//! ```text
//! GET    /            -> list_questions
//! POST   /            -> create_question
//! DELETE /{id}        -> delete_question
//! POST   /search      -> search_questions
//! ```

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::questions;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/{id}", delete(questions::delete_question))
        .route("/search", post(questions::search_questions))
}
