pub mod client;
pub mod parse;
pub mod prompts;

pub use client::RecipeClient;
pub use parse::{ingredient_names, recipe_entries, RecipeEntry};
