use std::env;

use crate::constants::DEFAULT_MAX_IMAGE_BYTES;

/// Default model used for both vision and text calls
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Default Anthropic API endpoint (overridable for tests)
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// Anthropic API key; the server refuses to start without one
    pub anthropic_api_key: String,
    pub anthropic_model: String,
    pub anthropic_base_url: String,
    /// Postgres connection string; persistence is disabled when unset
    pub database_url: Option<String>,
    /// Pool size for the optional Postgres connection
    pub db_max_connections: u32,
    pub allowed_origins: Vec<String>,
    pub max_image_bytes: usize,
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists (development)
        dotenvy::dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| "Invalid SERVER_PORT")?;

        let anthropic_api_key = env::var("ANTHROPIC_API_KEY")
            .map_err(|_| "ANTHROPIC_API_KEY must be set - get one from https://console.anthropic.com/")?;

        let anthropic_model =
            env::var("ANTHROPIC_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let anthropic_base_url =
            env::var("ANTHROPIC_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        // Optional: the app runs in demo mode (no history, no saved recipes) without it
        let database_url = env::var("DATABASE_URL").ok().filter(|s| !s.is_empty());

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .map_err(|_| "Invalid DB_MAX_CONNECTIONS")?;

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let max_image_bytes = env::var("MAX_IMAGE_BYTES")
            .unwrap_or_else(|_| DEFAULT_MAX_IMAGE_BYTES.to_string())
            .parse()
            .map_err(|_| "Invalid MAX_IMAGE_BYTES")?;

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        Ok(Config {
            server_host,
            server_port,
            anthropic_api_key,
            anthropic_model,
            anthropic_base_url,
            database_url,
            db_max_connections,
            allowed_origins,
            max_image_bytes,
            environment,
        })
    }

    /// Get server address as string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
