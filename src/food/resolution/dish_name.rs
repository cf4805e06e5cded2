use image::DynamicImage;
use log::{debug, info};

use super::candidates::{rank_candidates, CandidateDish};
use super::resolver::RecipeSources;
use crate::food::api::SourceKind;
use crate::food::matching::{best_match, CLASSIFIER_FALLBACK_CUTOFF};
use crate::providers::ensemble::{ClassifierEnsemble, EnsemblePrediction};
use crate::providers::traits::ClassifierError;

pub const UNKNOWN_DISH: &str = "unknown";

/// How the final dish name was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionMethod {
    /// A source recognised a candidate; the name is that recipe's title.
    Source(SourceKind),
    /// Closest local dataset name to a candidate.
    Fuzzy,
    /// Nothing matched, so the top candidate is used as is.
    TopCandidate,
    Unknown,
}

#[derive(Debug, Clone)]
pub struct DishPrediction {
    pub raw: EnsemblePrediction,
    pub candidates: Vec<CandidateDish>,
    pub dish: String,
    pub method: ResolutionMethod,
}

/// Turns classifier output for a photo into one dish name.
#[derive(Clone)]
pub struct DishNameResolver {
    ensemble: ClassifierEnsemble,
    sources: RecipeSources,
}

impl DishNameResolver {
    pub fn new(ensemble: ClassifierEnsemble, sources: RecipeSources) -> Self {
        Self { ensemble, sources }
    }

    pub async fn predict(&self, image: &DynamicImage) -> Result<DishPrediction, ClassifierError> {
        let raw = self.ensemble.predict(image).await?;
        let candidates = rank_candidates(raw.labels());
        debug!("Candidates: {:?}", candidates);

        let (dish, method) = self.choose(&candidates).await;
        info!("Predicted dish '{}' ({:?})", dish, method);

        Ok(DishPrediction {
            raw,
            candidates,
            dish,
            method,
        })
    }

    pub async fn resolve_dish_name(&self, image: &DynamicImage) -> Result<String, ClassifierError> {
        Ok(self.predict(image).await?.dish)
    }

    /// Every candidate is tried exactly against every source before any
    /// fuzzy matching, so an exact hit on a lower-ranked candidate beats a
    /// fuzzy hit on the top one.
    pub async fn choose(&self, candidates: &[CandidateDish]) -> (String, ResolutionMethod) {
        for candidate in candidates {
            if let Some((kind, recipe)) = self.sources.find_exact(&candidate.name).await {
                return (recipe.name, ResolutionMethod::Source(kind));
            }
        }

        let names = self.sources.local_names();
        for candidate in candidates {
            if let Some(matched) = best_match(&candidate.name, names, CLASSIFIER_FALLBACK_CUTOFF) {
                return (matched, ResolutionMethod::Fuzzy);
            }
        }

        match candidates.first() {
            Some(top) => (top.name.clone(), ResolutionMethod::TopCandidate),
            None => (UNKNOWN_DISH.to_string(), ResolutionMethod::Unknown),
        }
    }
}
