//! Saved recipe queries. Every query is scoped to the owning user.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::SavedRecipe;

pub const SQL_INSERT_RECIPE: &str = r#"
INSERT INTO saved_recipes (user_id, name, body, ingredients, tags, rating, notes)
VALUES ($1, $2, $3, $4, $5, $6, $7)
RETURNING id, user_id, name, body, ingredients, tags, rating, notes, created_at
"#;

pub const SQL_LIST_RECIPES: &str = r#"
SELECT id, user_id, name, body, ingredients, tags, rating, notes, created_at
FROM saved_recipes
WHERE user_id = $1
ORDER BY created_at DESC
"#;

pub const SQL_GET_RECIPE: &str = r#"
SELECT id, user_id, name, body, ingredients, tags, rating, notes, created_at
FROM saved_recipes
WHERE id = $1 AND user_id = $2
"#;

pub const SQL_DELETE_RECIPE: &str = r#"
DELETE FROM saved_recipes
WHERE id = $1 AND user_id = $2
"#;

#[allow(clippy::too_many_arguments)]
pub async fn insert_recipe(
    pool: &PgPool,
    user_id: Uuid,
    name: &str,
    body: &str,
    ingredients: &[String],
    tags: &[String],
    rating: Option<i32>,
    notes: Option<&str>,
) -> sqlx::Result<SavedRecipe> {
    sqlx::query_as::<_, SavedRecipe>(SQL_INSERT_RECIPE)
        .bind(user_id)
        .bind(name)
        .bind(body)
        .bind(ingredients)
        .bind(tags)
        .bind(rating)
        .bind(notes)
        .fetch_one(pool)
        .await
}

/// List the caller's saved recipes, newest first
pub async fn list_for_user(pool: &PgPool, user_id: Uuid) -> sqlx::Result<Vec<SavedRecipe>> {
    sqlx::query_as::<_, SavedRecipe>(SQL_LIST_RECIPES)
        .bind(user_id)
        .fetch_all(pool)
        .await
}

/// Fetch one recipe if the caller owns it; a foreign id yields None
pub async fn get_owned(
    pool: &PgPool,
    id: Uuid,
    user_id: Uuid,
) -> sqlx::Result<Option<SavedRecipe>> {
    sqlx::query_as::<_, SavedRecipe>(SQL_GET_RECIPE)
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

/// Delete one recipe if the caller owns it; returns whether a row went away
pub async fn delete_owned(pool: &PgPool, id: Uuid, user_id: Uuid) -> sqlx::Result<bool> {
    let result = sqlx::query(SQL_DELETE_RECIPE)
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
