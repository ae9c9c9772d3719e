use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{MAX_RATING, MIN_RATING};

/// A recipe the user chose to keep
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SavedRecipe {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    /// Full recipe text (instructions, timings, tips)
    pub body: String,
    pub ingredients: Vec<String>,
    pub tags: Vec<String>,
    /// Optional 1-5 star rating
    pub rating: Option<i32>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl SavedRecipe {
    /// Validate a rating is within the allowed 1-5 range
    pub fn validate_rating(rating: i32) -> bool {
        (MIN_RATING..=MAX_RATING).contains(&rating)
    }

    /// Render the recipe as plain text for download
    pub fn export_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.name);
        out.push_str("\n\n");
        if !self.ingredients.is_empty() {
            out.push_str("Ingredients:\n");
            for ingredient in &self.ingredients {
                out.push_str("- ");
                out.push_str(ingredient);
                out.push('\n');
            }
            out.push('\n');
        }
        out.push_str(&self.body);
        out.push('\n');
        if let Some(notes) = self.notes.as_deref().filter(|n| !n.is_empty()) {
            out.push_str("\nNotes: ");
            out.push_str(notes);
            out.push('\n');
        }
        out
    }
}
