use crate::types::DbId;

/// Seam between the persistence layer and the domain engines.
///
/// The filter and quiz modules only need three facts about a question:
/// its id, the category it belongs to, and its display text. The db
/// crate's `Question` model implements this; core tests use a small
/// fixture struct instead of dragging in sqlx.
pub trait QuestionLike {
    fn id(&self) -> DbId;
    fn category_id(&self) -> DbId;
    fn prompt(&self) -> &str;
}
