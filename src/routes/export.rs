use axum::{
    extract::{Path, State},
    http::header,
    response::Response,
};
use uuid::Uuid;

use crate::db::recipes;
use crate::error::{AppError, Result};
use crate::routes::ident::UserContext;
use crate::AppState;

/// Download a saved recipe as plain text
///
/// GET /api/recipes/:id/export
pub async fn export_recipe(
    State(state): State<AppState>,
    user: UserContext,
    Path(id): Path<Uuid>,
) -> Result<Response> {
    let pool = state.pool()?;
    let user_id = user.require_user()?;

    let recipe = recipes::get_owned(pool, id, user_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let filename = format!("{}.txt", sanitize_filename(&recipe.name));

    let response = Response::builder()
        .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        )
        .body(recipe.export_text().into())
        .map_err(|e| AppError::InvalidInput(e.to_string()))?;

    Ok(response)
}

/// Reduce a recipe name to a safe download filename
fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' => c,
            ' ' => '_',
            _ => '\0',
        })
        .filter(|c| *c != '\0')
        .collect();

    if cleaned.is_empty() {
        "recipe".to_string()
    } else {
        cleaned
    }
}
