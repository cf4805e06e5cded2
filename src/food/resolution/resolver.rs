use log::info;
use std::sync::Arc;
use thiserror::Error;

use super::strategy::SourceStrategy;
use crate::food::api::{RecipeSource, SourceKind};
use crate::food::recipe::Recipe;

#[derive(Error, Debug)]
pub enum SourceSetError {
    #[error("No {0} source configured")]
    Missing(SourceKind),
    #[error("{0} source configured more than once")]
    Duplicate(SourceKind),
}

/// One source of each kind, ordered by [`SourceKind::PRIORITY`].
#[derive(Clone)]
pub struct RecipeSources {
    strategies: Vec<SourceStrategy>,
}

impl RecipeSources {
    pub fn new(
        mealdb: Arc<dyn RecipeSource>,
        local_dataset: Arc<dyn RecipeSource>,
        spoonacular: Arc<dyn RecipeSource>,
    ) -> Result<Self, SourceSetError> {
        Self::from_sources(vec![mealdb, local_dataset, spoonacular])
    }

    /// Orders `sources` by priority regardless of the order given.
    pub fn from_sources(sources: Vec<Arc<dyn RecipeSource>>) -> Result<Self, SourceSetError> {
        let mut strategies = Vec::with_capacity(SourceKind::PRIORITY.len());
        for kind in SourceKind::PRIORITY {
            let mut matching = sources.iter().filter(|s| s.kind() == kind);
            let source = matching.next().ok_or(SourceSetError::Missing(kind))?;
            if matching.next().is_some() {
                return Err(SourceSetError::Duplicate(kind));
            }
            strategies.push(SourceStrategy::new(Arc::clone(source)));
        }
        Ok(Self { strategies })
    }

    pub fn in_priority_order(&self) -> &[SourceStrategy] {
        &self.strategies
    }

    /// Names the local dataset can enumerate.
    pub fn local_names(&self) -> &[String] {
        self.strategies
            .iter()
            .find(|s| s.kind() == SourceKind::LocalDataset)
            .and_then(|s| s.source().known_names())
            .unwrap_or(&[])
    }

    /// First exact hit in priority order, without any fuzzy retry.
    pub async fn find_exact(&self, dish: &str) -> Option<(SourceKind, Recipe)> {
        for strategy in &self.strategies {
            if let Some(recipe) = strategy.exact(dish).await {
                return Some((strategy.kind(), recipe));
            }
        }
        None
    }
}

/// Fetches a recipe for a dish name, trying each source in order.
#[derive(Clone)]
pub struct RecipeResolver {
    sources: RecipeSources,
}

impl RecipeResolver {
    pub fn new(sources: RecipeSources) -> Self {
        Self { sources }
    }

    /// Recipe from the first source that knows `dish`, with the source it
    /// came from.
    pub async fn find(&self, dish: &str) -> Option<(SourceKind, Recipe)> {
        for strategy in self.sources.in_priority_order() {
            if let Some(recipe) = strategy.resolve(dish).await {
                info!("Found '{}' in {} as '{}'", dish, strategy.kind(), recipe.name);
                return Some((strategy.kind(), recipe));
            }
        }
        None
    }

    /// Like [`find`](Self::find) but falls back to the placeholder recipe.
    pub async fn resolve(&self, dish: &str) -> Recipe {
        match self.find(dish).await {
            Some((_, recipe)) => recipe,
            None => {
                info!("No source has a recipe for '{}'", dish);
                Recipe::not_found(dish)
            }
        }
    }
}
