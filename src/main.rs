use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fridge_to_recipe_server::config::Config;
use fridge_to_recipe_server::db::create_pool;
use fridge_to_recipe_server::routes::{
    analyze_image, delete_recipe, export_recipe, get_preferences, get_recipe, health_check,
    index_page, list_history, list_recipes, put_preferences, save_recipe,
};
use fridge_to_recipe_server::AppState;

/// Headroom on top of the image cap for the other multipart fields
const BODY_LIMIT_SLACK: usize = 65_536;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fridge_to_recipe_server=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Fridge to Recipe server...");

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!(
        "Environment: {}, Server: {}, Model: {}",
        config.environment,
        config.server_address(),
        config.anthropic_model
    );

    // Create the database pool when persistence is configured
    let pool = match &config.database_url {
        Some(url) => {
            let pool = create_pool(url, config.db_max_connections).await?;

            tracing::info!("Running database migrations...");
            sqlx::migrate!("./migrations").run(&pool).await?;
            tracing::info!("Migrations complete");

            Some(pool)
        }
        None => {
            tracing::warn!("DATABASE_URL not set - running in demo mode without persistence");
            None
        }
    };

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(
            config
                .allowed_origins
                .iter()
                .map(|s| s.parse().unwrap())
                .collect::<Vec<_>>(),
        )
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::PUT,
            axum::http::Method::DELETE,
        ])
        .allow_headers(Any);

    let body_limit = config.max_image_bytes + BODY_LIMIT_SLACK;

    // Create app state
    let state = AppState::new(pool, config.clone());

    // Build router
    let app = Router::new()
        .route("/", get(index_page))
        .route("/health", get(health_check))
        .route("/api/analyze", post(analyze_image))
        .route("/api/history", get(list_history))
        .route("/api/recipes", post(save_recipe).get(list_recipes))
        .route(
            "/api/recipes/:id",
            get(get_recipe).delete(delete_recipe),
        )
        .route("/api/recipes/:id/export", get(export_recipe))
        .route(
            "/api/preferences",
            get(get_preferences).put(put_preferences),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    // Start server
    let addr: SocketAddr = config.server_address().parse()?;
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
