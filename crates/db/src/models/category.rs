//! Category entity model.

use serde::Serialize;
use sqlx::FromRow;
use trivia_core::types::DbId;

/// A category row from the `categories` table.
///
/// The display label column is named `type` in the schema and on the
/// wire; `type` is a Rust keyword, so the field is `kind` internally.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
}
