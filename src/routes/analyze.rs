use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::ai::{ingredient_names, recipe_entries};
use crate::db::{preferences, searches};
use crate::error::{AppError, Result};
use crate::image::{encode_image, EncodedImage};
use crate::routes::ident::UserContext;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    /// Raw identification text (INGREDIENTS/CATEGORIES sections)
    pub ingredients: String,
    /// Flat ingredient name list parsed from the above
    #[serde(rename = "ingredientNames")]
    pub ingredient_names: Vec<String>,
    /// Raw recipe suggestion text
    pub recipes: String,
    /// Titles of the individual suggestions
    #[serde(rename = "recipeTitles")]
    pub recipe_titles: Vec<String>,
    /// History row id, when persistence is on and the insert succeeded
    #[serde(rename = "searchId")]
    pub search_id: Option<Uuid>,
}

/// Analyze an uploaded photo and suggest recipes
///
/// Multipart fields: `image` (required), `dietary` (optional, comma
/// separated), `cuisine` (optional). When the caller sends no
/// preferences and has a stored preference row, the stored values are
/// used instead.
///
/// The flow is: validate image -> identify ingredients -> suggest
/// recipes -> best-effort history insert. A failed insert never fails
/// the request; the caller already paid for the AI calls.
pub async fn analyze_image(
    State(state): State<AppState>,
    user: UserContext,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>> {
    // 1. Pull the image and preference fields out of the multipart body
    let mut image: Option<EncodedImage> = None;
    let mut dietary: Vec<String> = Vec::new();
    let mut cuisine: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "image" => {
                let bytes = field.bytes().await?;
                // Validated before any network call
                image = Some(encode_image(&bytes, state.config.max_image_bytes)?);
            }
            "dietary" => {
                dietary = field
                    .text()
                    .await?
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
            }
            "cuisine" => {
                let value = field.text().await?.trim().to_string();
                if !value.is_empty() {
                    cuisine = Some(value);
                }
            }
            _ => {
                tracing::debug!("Ignoring unknown multipart field: {}", name);
            }
        }
    }

    let image = image.ok_or_else(|| {
        AppError::InvalidInput("Missing 'image' field in upload".to_string())
    })?;

    // 2. Fall back to the caller's stored preferences when none were sent
    if dietary.is_empty() && cuisine.is_none() {
        if let (Ok(pool), Some(user_id)) = (state.pool(), user.user_id) {
            match preferences::get_for_user(pool, user_id).await {
                Ok(Some(prefs)) => {
                    dietary = prefs.dietary_restrictions;
                    cuisine = prefs.preferred_cuisines.first().cloned();
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!("Failed to load stored preferences: {:?}", e);
                }
            }
        }
    }

    // 3. Identify ingredients from the photo
    tracing::info!(
        "Analyzing {} image ({} bytes)",
        image.media_type.as_str(),
        image.byte_len
    );
    let ingredients = state.ai.identify_ingredients(&image).await?;
    let names = ingredient_names(&ingredients);

    // 4. Turn the ingredient list into recipe suggestions
    let recipes = state
        .ai
        .suggest_recipes(&ingredients, &dietary, cuisine.as_deref())
        .await?;
    let titles: Vec<_> = recipe_entries(&recipes)
        .into_iter()
        .map(|e| e.title)
        .collect();

    // 5. Record the search when persistence is configured (best effort)
    let search_id = match &state.pool {
        Some(pool) => {
            match searches::insert_search(
                pool,
                user.user_id,
                &ingredients,
                &recipes,
                Some(image.media_type.as_str()),
            )
            .await
            {
                Ok(record) => Some(record.id),
                Err(e) => {
                    tracing::warn!("Failed to save search history: {:?}", e);
                    None
                }
            }
        }
        None => None,
    };

    tracing::info!(
        "Analysis complete: {} ingredients, {} suggestions",
        names.len(),
        titles.len()
    );

    Ok(Json(AnalyzeResponse {
        ingredients,
        ingredient_names: names,
        recipes,
        recipe_titles: titles,
        search_id,
    }))
}
