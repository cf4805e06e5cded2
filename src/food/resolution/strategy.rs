use log::{debug, warn};
use std::sync::Arc;

use crate::food::api::{RecipeSource, SourceKind};
use crate::food::matching::{best_match, DATASET_FALLBACK_CUTOFF};
use crate::food::recipe::Recipe;

/// What to do after an exact lookup misses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FallbackPolicy {
    ExactOnly,
    /// Fuzzy-match against the source's own name corpus, then look the
    /// matched name up exactly.
    ExactThenFuzzy { cutoff: f64 },
}

impl FallbackPolicy {
    /// Only the local dataset can enumerate its names without network cost,
    /// so it is the only source with a fuzzy retry.
    pub fn for_source(kind: SourceKind) -> Self {
        match kind {
            SourceKind::MealDb | SourceKind::Spoonacular => FallbackPolicy::ExactOnly,
            SourceKind::LocalDataset => FallbackPolicy::ExactThenFuzzy {
                cutoff: DATASET_FALLBACK_CUTOFF,
            },
        }
    }
}

#[derive(Clone)]
pub struct SourceStrategy {
    source: Arc<dyn RecipeSource>,
    policy: FallbackPolicy,
}

impl SourceStrategy {
    pub fn new(source: Arc<dyn RecipeSource>) -> Self {
        let policy = FallbackPolicy::for_source(source.kind());
        Self { source, policy }
    }

    pub fn kind(&self) -> SourceKind {
        self.source.kind()
    }

    pub fn source(&self) -> &Arc<dyn RecipeSource> {
        &self.source
    }

    /// Single exact lookup. Unavailable sources are logged and reported as
    /// a miss.
    pub async fn exact(&self, dish: &str) -> Option<Recipe> {
        debug!("Exact lookup of '{}' in {}", dish, self.kind());
        match self.source.lookup(dish).await {
            Ok(recipe) => Some(recipe),
            Err(e) => {
                if e.is_unavailable() {
                    warn!("{} unavailable for '{}': {}", self.kind(), dish, e);
                }
                None
            }
        }
    }

    /// Exact lookup followed by this source's fallback policy.
    pub async fn resolve(&self, dish: &str) -> Option<Recipe> {
        if let Some(recipe) = self.exact(dish).await {
            return Some(recipe);
        }

        match self.policy {
            FallbackPolicy::ExactOnly => None,
            FallbackPolicy::ExactThenFuzzy { cutoff } => {
                let names = self.source.known_names()?;
                let matched = best_match(dish, names, cutoff)?;
                debug!("Fuzzy matched '{}' to '{}' in {}", dish, matched, self.kind());
                self.exact(&matched).await
            }
        }
    }
}
