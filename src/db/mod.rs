pub mod pool;
pub mod preferences;
pub mod recipes;
pub mod searches;

pub use pool::create_pool;
