use image::DynamicImage;
use log::info;
use std::sync::Arc;

use super::traits::{ClassifierError, DishClassifier};

/// Raw outputs of the three classifiers for one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnsemblePrediction {
    pub indian: String,
    pub western: String,
    pub general: String,
}

impl EnsemblePrediction {
    /// Flattens the outputs into lower-cased labels, in classifier order.
    /// Only the general model's output is split on commas.
    pub fn labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = [&self.indian, &self.western]
            .into_iter()
            .filter_map(|label| normalize_label(label))
            .collect();
        labels.extend(split_compound_label(&self.general));
        labels
    }
}

pub fn normalize_label(label: &str) -> Option<String> {
    let label = label.trim().to_lowercase();
    (!label.is_empty()).then_some(label)
}

/// Splits a comma-joined label into trimmed, lower-cased, non-empty parts.
pub fn split_compound_label(raw: &str) -> Vec<String> {
    raw.split(',').filter_map(normalize_label).collect()
}

#[derive(Clone)]
pub struct ClassifierEnsemble {
    indian: Arc<dyn DishClassifier>,
    western: Arc<dyn DishClassifier>,
    general: Arc<dyn DishClassifier>,
}

impl ClassifierEnsemble {
    pub fn new(
        indian: Arc<dyn DishClassifier>,
        western: Arc<dyn DishClassifier>,
        general: Arc<dyn DishClassifier>,
    ) -> Self {
        Self {
            indian,
            western,
            general,
        }
    }

    /// Runs the classifiers one after another. The first failure aborts.
    pub async fn predict(&self, image: &DynamicImage) -> Result<EnsemblePrediction, ClassifierError> {
        let indian = self.indian.classify(image).await?;
        info!("{}: {}", self.indian.model_name(), indian);
        let western = self.western.classify(image).await?;
        info!("{}: {}", self.western.model_name(), western);
        let general = self.general.classify(image).await?;
        info!("{}: {}", self.general.model_name(), general);

        Ok(EnsemblePrediction {
            indian,
            western,
            general,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::food::testing::FakeClassifier;

    #[test]
    fn test_split_compound_label() {
        assert_eq!(
            split_compound_label(" Samosa, Pastry ,, "),
            vec!["samosa", "pastry"]
        );
        assert!(split_compound_label("").is_empty());
    }

    #[test]
    fn test_labels_keep_classifier_order() {
        let prediction = EnsemblePrediction {
            indian: "Samosa".to_string(),
            western: "spring_rolls".to_string(),
            general: "samosa, pastry".to_string(),
        };
        assert_eq!(
            prediction.labels(),
            vec!["samosa", "spring_rolls", "samosa", "pastry"]
        );
    }

    #[test]
    fn test_single_labels_are_not_split() {
        let prediction = EnsemblePrediction {
            indian: "dal makhani, curry".to_string(),
            western: " ".to_string(),
            general: "plate".to_string(),
        };
        assert_eq!(prediction.labels(), vec!["dal makhani, curry", "plate"]);
    }

    #[tokio::test]
    async fn test_predict_calls_each_classifier_once() {
        let indian = Arc::new(FakeClassifier::new("indian", "samosa"));
        let western = Arc::new(FakeClassifier::new("western", "food"));
        let general = Arc::new(FakeClassifier::new("general", "samosa, pastry"));
        let ensemble = ClassifierEnsemble::new(indian.clone(), western.clone(), general.clone());

        let prediction = ensemble.predict(&DynamicImage::new_rgb8(1, 1)).await.unwrap();
        assert_eq!(prediction.western, "food");
        assert_eq!((indian.calls(), western.calls(), general.calls()), (1, 1, 1));
    }

    #[tokio::test]
    async fn test_classifier_failure_aborts() {
        let indian = Arc::new(FakeClassifier::new("indian", "samosa"));
        let western = Arc::new(FakeClassifier::failing("western"));
        let general = Arc::new(FakeClassifier::new("general", "samosa"));
        let ensemble = ClassifierEnsemble::new(indian, western, general.clone());

        let result = ensemble.predict(&DynamicImage::new_rgb8(1, 1)).await;
        assert!(result.is_err());
        assert_eq!(general.calls(), 0);
    }
}
