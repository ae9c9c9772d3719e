pub mod analyze;
pub mod export;
pub mod health;
pub mod history;
pub mod ident;
pub mod index;
pub mod preferences;
pub mod recipes;

pub use analyze::analyze_image;
pub use export::export_recipe;
pub use health::health_check;
pub use history::list_history;
pub use ident::UserContext;
pub use index::index_page;
pub use preferences::{get_preferences, put_preferences};
pub use recipes::{delete_recipe, get_recipe, list_recipes, save_recipe};
