use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

/// Build pool options for this service's load profile
///
/// Traffic is a handful of interactive requests, each pinned to a slow
/// AI round-trip before it ever touches Postgres, so the pool stays
/// small and a single idle connection is enough to keep warm.
fn pool_options(max_connections: u32) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
}

/// Connect to the Postgres instance holding searches, recipes and
/// preferences; pool size comes from `DB_MAX_CONNECTIONS`
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    tracing::info!(
        "Connecting to the recipe database (up to {} connections)...",
        max_connections
    );

    let pool = pool_options(max_connections).connect(database_url).await?;

    tracing::info!("Recipe database pool ready");

    Ok(pool)
}
