//! Repository for the `categories` table.

use sqlx::PgPool;
use trivia_core::types::DbId;

use crate::models::category::Category;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, type";

/// Read operations for categories. Categories are seeded externally
/// and immutable in this service, so there is no create or update.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories in ascending id order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Find a category by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Total number of categories.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(pool)
            .await
    }
}
