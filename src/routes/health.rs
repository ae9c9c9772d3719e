use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

/// Health check endpoint
///
/// Returns the health status of the server and database connection.
/// Used by load balancers and monitoring systems. With persistence
/// disabled the server is still healthy and reports `"disabled"`.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let db_status = match &state.pool {
        None => "disabled",
        Some(pool) => match sqlx::query("SELECT 1").execute(pool).await {
            Ok(_) => "connected",
            Err(e) => {
                tracing::error!("Database health check failed: {:?}", e);
                "disconnected"
            }
        },
    };

    Json(json!({
        "status": if db_status == "disconnected" { "unhealthy" } else { "healthy" },
        "database": db_status,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
