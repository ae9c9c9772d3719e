use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One photo-analysis interaction, kept as search history
///
/// `user_id` is NULL for anonymous (demo mode) searches; anonymous rows
/// are readable by anyone, owned rows only by their owner.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct SearchRecord {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    /// Raw identification response (INGREDIENTS/CATEGORIES text)
    pub ingredients_detected: String,
    /// Raw recipe suggestion text
    pub recipes_suggested: String,
    /// Media type of the analyzed image, when one was uploaded
    pub image_media_type: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
