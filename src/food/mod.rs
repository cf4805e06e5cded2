pub mod api;
pub mod config;
pub mod finder;
pub mod matching;
pub mod recipe;
pub mod resolution;

#[cfg(test)]
pub(crate) mod testing;

pub use finder::DishFinder;
pub use recipe::Recipe;
