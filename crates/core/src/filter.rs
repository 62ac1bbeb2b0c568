//! Category and search-term predicates over the question collection.
//!
//! Both filters are stable (input order preserved) and independent; the
//! handler composes them with [`crate::pagination::paginate`] as needed.

use crate::question::QuestionLike;
use crate::types::DbId;

/// Keep questions whose category id equals `category_id` exactly.
pub fn by_category<T: QuestionLike>(items: &[T], category_id: DbId) -> Vec<&T> {
    items
        .iter()
        .filter(|q| q.category_id() == category_id)
        .collect()
}

/// Keep questions whose text contains `term` as a case-insensitive substring.
///
/// Callers are expected to run the raw term through [`normalize_term`]
/// first; a blank term means "redirect to the unfiltered listing", not
/// "match everything", and that decision belongs to the handler.
pub fn by_search_term<'a, T: QuestionLike>(items: &'a [T], term: &str) -> Vec<&'a T> {
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|q| q.prompt().to_lowercase().contains(&needle))
        .collect()
}

/// Trim a raw search term; blank input maps to `None`.
pub fn normalize_term(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
