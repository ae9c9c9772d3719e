use axum::{extract::State, Json};
use serde::Deserialize;

use crate::constants::{ERR_INVALID_HOUSEHOLD_SIZE, ERR_INVALID_SKILL_LEVEL};
use crate::db::preferences;
use crate::error::{AppError, Result};
use crate::models::{SkillLevel, UserPreference};
use crate::routes::ident::UserContext;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PutPreferencesRequest {
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    #[serde(default)]
    pub preferred_cuisines: Vec<String>,
    /// One of: beginner, intermediate, advanced
    pub skill_level: String,
    pub household_size: i32,
}

/// The caller's preference row (404 if none saved yet)
pub async fn get_preferences(
    State(state): State<AppState>,
    user: UserContext,
) -> Result<Json<UserPreference>> {
    let pool = state.pool()?;
    let user_id = user.require_user()?;

    let prefs = preferences::get_for_user(pool, user_id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(prefs))
}

/// Create or replace the caller's preferences
///
/// One row per user: a second PUT updates the existing row, and the
/// shared trigger stamps `updated_at`.
pub async fn put_preferences(
    State(state): State<AppState>,
    user: UserContext,
    Json(payload): Json<PutPreferencesRequest>,
) -> Result<Json<UserPreference>> {
    // 1. Validate the enum and range fields before touching the database
    let skill_level = SkillLevel::parse(&payload.skill_level)
        .ok_or_else(|| AppError::InvalidInput(ERR_INVALID_SKILL_LEVEL.to_string()))?;

    if !UserPreference::validate_household_size(payload.household_size) {
        return Err(AppError::InvalidInput(ERR_INVALID_HOUSEHOLD_SIZE.to_string()));
    }

    let user_id = user.require_user()?;
    let pool = state.pool()?;

    // 2. Upsert
    let prefs = preferences::upsert(
        pool,
        user_id,
        &payload.dietary_restrictions,
        &payload.preferred_cuisines,
        skill_level,
        payload.household_size,
    )
    .await?;

    tracing::info!("Preferences updated for user {}", user_id);

    Ok(Json(prefs))
}
