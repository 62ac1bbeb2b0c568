//! Route definitions for quiz play, mounted at `/quizzes`.
//!
//! ```text
//! POST / -> next_quiz_question
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::quizzes;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(quizzes::next_quiz_question))
}
