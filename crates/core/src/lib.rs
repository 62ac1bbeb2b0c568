//! Domain logic for the trivia service.
//!
//! Everything in this crate is a pure function over already-fetched,
//! id-ordered collections: slicing a page, filtering by category or
//! search term, and drawing the next quiz question. Persistence and
//! HTTP live in `trivia-db` and `trivia-api`; the seam between them
//! is the [`QuestionLike`] trait.

pub mod error;
pub mod filter;
pub mod pagination;
pub mod question;
pub mod quiz;
pub mod types;

pub use error::CoreError;
pub use question::QuestionLike;
