pub mod candidates;
pub mod dish_name;
pub mod resolver;
pub mod strategy;

pub use candidates::{rank_candidates, CandidateDish, GENERIC_TERMS};
pub use dish_name::{DishNameResolver, DishPrediction, ResolutionMethod, UNKNOWN_DISH};
pub use resolver::{RecipeResolver, RecipeSources, SourceSetError};
pub use strategy::{FallbackPolicy, SourceStrategy};
