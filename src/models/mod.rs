pub mod preference;
pub mod recipe;
pub mod search;

pub use preference::{SkillLevel, UserPreference};
pub use recipe::SavedRecipe;
pub use search::SearchRecord;
