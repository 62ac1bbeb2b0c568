//! Entity models and DTOs.

pub mod category;
pub mod question;

pub use category::Category;
pub use question::{CreateQuestion, Question};
