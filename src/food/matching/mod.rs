pub mod fuzzy;

pub use fuzzy::{best_match, similarity, CLASSIFIER_FALLBACK_CUTOFF, DATASET_FALLBACK_CUTOFF};
