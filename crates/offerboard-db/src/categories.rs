//! Queries against the `categories` table.

use sqlx::PgPool;
use uuid::Uuid;

use offerboard_core::Category;

use crate::DbError;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CategoryRow {
    pub id: Uuid,
    pub name: String,
    pub icon: Option<String>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            id: row.id,
            name: row.name,
            icon: row.icon,
        }
    }
}

/// Lists all categories, ordered by name for stable output.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_categories(pool: &PgPool) -> Result<Vec<Category>, DbError> {
    let rows =
        sqlx::query_as::<_, CategoryRow>("SELECT id, name, icon FROM categories ORDER BY name")
            .fetch_all(pool)
            .await?;

    Ok(rows.into_iter().map(Category::from).collect())
}

/// Looks up a single category by primary key.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn get_category_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Category>, DbError> {
    let row = sqlx::query_as::<_, CategoryRow>("SELECT id, name, icon FROM categories WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(Category::from))
}
