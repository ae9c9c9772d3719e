//! Fridge-to-Recipe server library
//!
//! Exports the core types and functions for testing and reuse.

pub mod ai;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod image;
pub mod models;
pub mod routes;

pub use config::Config;
pub use error::{AppError, Result};

use ai::RecipeClient;
use sqlx::PgPool;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// None when DATABASE_URL is unset; the app then runs in demo mode
    pub pool: Option<PgPool>,
    pub ai: RecipeClient,
    pub config: Config,
}

impl AppState {
    pub fn new(pool: Option<PgPool>, config: Config) -> Self {
        let ai = RecipeClient::new(&config);
        Self { pool, ai, config }
    }

    /// The pool, or a 503 for persistence endpoints in demo mode
    pub fn pool(&self) -> Result<&PgPool> {
        self.pool.as_ref().ok_or(AppError::PersistenceDisabled)
    }
}
