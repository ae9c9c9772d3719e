use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{ERR_EMPTY_RECIPE, ERR_RATING_OUT_OF_RANGE};
use crate::db::recipes;
use crate::error::{AppError, Result};
use crate::models::SavedRecipe;
use crate::routes::ident::UserContext;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SaveRecipeRequest {
    pub name: String,
    pub body: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub rating: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeleteRecipeResponse {
    pub success: bool,
}

/// Save a recipe for later
///
/// Requires a user id; anonymous callers cannot own rows. The rating,
/// when present, must be 1-5 (checked here before it reaches SQL, and
/// again by the table's CHECK constraint).
pub async fn save_recipe(
    State(state): State<AppState>,
    user: UserContext,
    Json(payload): Json<SaveRecipeRequest>,
) -> Result<Json<SavedRecipe>> {
    // 1. Validate the payload before touching the database
    if payload.name.trim().is_empty() || payload.body.trim().is_empty() {
        return Err(AppError::InvalidInput(ERR_EMPTY_RECIPE.to_string()));
    }

    if let Some(rating) = payload.rating {
        if !SavedRecipe::validate_rating(rating) {
            tracing::warn!("Rejected out-of-range rating: {}", rating);
            return Err(AppError::InvalidInput(ERR_RATING_OUT_OF_RANGE.to_string()));
        }
    }

    let user_id = user.require_user()?;
    let pool = state.pool()?;

    // 2. Insert the row
    let recipe = recipes::insert_recipe(
        pool,
        user_id,
        payload.name.trim(),
        &payload.body,
        &payload.ingredients,
        &payload.tags,
        payload.rating,
        payload.notes.as_deref(),
    )
    .await?;

    tracing::info!("Recipe saved: {} ({})", recipe.name, recipe.id);

    Ok(Json(recipe))
}

/// List the caller's saved recipes, newest first
pub async fn list_recipes(
    State(state): State<AppState>,
    user: UserContext,
) -> Result<Json<Vec<SavedRecipe>>> {
    let pool = state.pool()?;
    let user_id = user.require_user()?;

    let rows = recipes::list_for_user(pool, user_id).await?;

    Ok(Json(rows))
}

/// Fetch one saved recipe
///
/// A recipe owned by another user is a 404, not a 403, so recipe ids
/// do not leak existence.
pub async fn get_recipe(
    State(state): State<AppState>,
    user: UserContext,
    Path(id): Path<Uuid>,
) -> Result<Json<SavedRecipe>> {
    let pool = state.pool()?;
    let user_id = user.require_user()?;

    let recipe = recipes::get_owned(pool, id, user_id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(recipe))
}

/// Delete one saved recipe (owner only)
pub async fn delete_recipe(
    State(state): State<AppState>,
    user: UserContext,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteRecipeResponse>> {
    let pool = state.pool()?;
    let user_id = user.require_user()?;

    if !recipes::delete_owned(pool, id, user_id).await? {
        return Err(AppError::NotFound);
    }

    tracing::info!("Recipe deleted: {}", id);

    Ok(Json(DeleteRecipeResponse { success: true }))
}
