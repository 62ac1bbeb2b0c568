//! Request handlers.
//!
//! Handlers own HTTP semantics only: they fetch id-ordered collections
//! through the repositories, run them through the core engines
//! (pagination, filtering, quiz selection), and decide which empty
//! results become errors. The engines themselves never raise.

pub mod categories;
pub mod questions;
pub mod quizzes;
