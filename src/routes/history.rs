use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::constants::{DEFAULT_HISTORY_LIMIT, MAX_HISTORY_LIMIT};
use crate::db::searches;
use crate::error::Result;
use crate::models::SearchRecord;
use crate::routes::ident::UserContext;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    pub limit: Option<i64>,
}

/// Clamp the requested page size to 1..=50, defaulting to 10
fn effective_limit(requested: Option<i64>) -> i64 {
    requested
        .unwrap_or(DEFAULT_HISTORY_LIMIT)
        .clamp(1, MAX_HISTORY_LIMIT)
}

/// Recent search history visible to the caller
///
/// Returns the caller's own searches plus anonymous ones, newest first.
/// An anonymous caller only sees anonymous rows.
pub async fn list_history(
    State(state): State<AppState>,
    user: UserContext,
    Query(params): Query<HistoryParams>,
) -> Result<Json<Vec<SearchRecord>>> {
    let pool = state.pool()?;

    let limit = effective_limit(params.limit);

    let records = searches::list_visible(pool, user.user_id, limit).await?;

    Ok(Json(records))
}
