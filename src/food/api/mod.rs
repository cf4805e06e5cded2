pub mod local_dataset;
pub mod mealdb;
pub mod source;
pub mod spoonacular;

// Re-export common types
pub use local_dataset::{DatasetError, LocalDataset};
pub use mealdb::MealDbClient;
pub use source::{RecipeSource, SourceError, SourceKind};
pub use spoonacular::SpoonacularClient;
