//! Search history queries.
//!
//! Visibility rule: a caller sees anonymous rows (`user_id IS NULL`)
//! plus their own rows, never other users' rows. The rule is in the SQL
//! here and mirrored by row-level security policies in the migration.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::SearchRecord;

pub const SQL_INSERT_SEARCH: &str = r#"
INSERT INTO recipe_searches (user_id, ingredients_detected, recipes_suggested, image_media_type)
VALUES ($1, $2, $3, $4)
RETURNING id, user_id, ingredients_detected, recipes_suggested, image_media_type,
          created_at, updated_at
"#;

pub const SQL_LIST_VISIBLE_SEARCHES: &str = r#"
SELECT id, user_id, ingredients_detected, recipes_suggested, image_media_type,
       created_at, updated_at
FROM recipe_searches
WHERE user_id IS NULL OR user_id = $1
ORDER BY created_at DESC
LIMIT $2
"#;

/// Record a completed analysis; `user_id` is None for anonymous searches
pub async fn insert_search(
    pool: &PgPool,
    user_id: Option<Uuid>,
    ingredients_detected: &str,
    recipes_suggested: &str,
    image_media_type: Option<&str>,
) -> sqlx::Result<SearchRecord> {
    sqlx::query_as::<_, SearchRecord>(SQL_INSERT_SEARCH)
        .bind(user_id)
        .bind(ingredients_detected)
        .bind(recipes_suggested)
        .bind(image_media_type)
        .fetch_one(pool)
        .await
}

/// List the searches visible to this caller, newest first
///
/// An anonymous caller (`user_id` None) only sees anonymous rows, since
/// `user_id = NULL` never matches.
pub async fn list_visible(
    pool: &PgPool,
    user_id: Option<Uuid>,
    limit: i64,
) -> sqlx::Result<Vec<SearchRecord>> {
    sqlx::query_as::<_, SearchRecord>(SQL_LIST_VISIBLE_SEARCHES)
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await
}
