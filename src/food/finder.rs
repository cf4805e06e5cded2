use anyhow::{Context, Result};
use image::DynamicImage;
use reqwest::Client;
use std::sync::Arc;

use crate::config::{ClassifierConfig, ClassifierRole};
use crate::food::api::{LocalDataset, MealDbClient, SpoonacularClient};
use crate::food::config::FoodConfig;
use crate::food::recipe::Recipe;
use crate::food::resolution::{DishNameResolver, DishPrediction, RecipeResolver, RecipeSources};
use crate::providers::ensemble::ClassifierEnsemble;
use crate::providers::huggingface::HuggingFaceClassifier;
use crate::providers::traits::ClassifierError;

/// Photo-to-recipe pipeline: names the dish, then fetches its recipe.
#[derive(Clone)]
pub struct DishFinder {
    dish_names: DishNameResolver,
    recipes: RecipeResolver,
}

impl DishFinder {
    pub fn new(ensemble: ClassifierEnsemble, sources: RecipeSources) -> Self {
        Self {
            dish_names: DishNameResolver::new(ensemble, sources.clone()),
            recipes: RecipeResolver::new(sources),
        }
    }

    /// Loads the dataset and builds the HTTP-backed sources and classifiers.
    pub fn from_config(food: &FoodConfig, hf_token: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(food.request_timeout)
            .build()
            .context("Failed to build HTTP client")?;

        let dataset = LocalDataset::open(&food.dataset_path).with_context(|| {
            format!("Failed to load recipe dataset {}", food.dataset_path.display())
        })?;

        let sources = RecipeSources::new(
            Arc::new(MealDbClient::new(client.clone(), food.mealdb_base_url.clone())),
            Arc::new(dataset),
            Arc::new(SpoonacularClient::new(
                client.clone(),
                food.spoonacular_api_key.clone(),
                food.spoonacular_base_url.clone(),
            )),
        )?;

        let classifier = |role: ClassifierRole| -> Result<Arc<HuggingFaceClassifier>> {
            let config = ClassifierConfig::from_env(role)?;
            Ok(Arc::new(HuggingFaceClassifier::new(client.clone(), hf_token.clone(), config)))
        };
        let ensemble = ClassifierEnsemble::new(
            classifier(ClassifierRole::Indian)?,
            classifier(ClassifierRole::Western)?,
            classifier(ClassifierRole::General)?,
        );

        Ok(Self::new(ensemble, sources))
    }

    pub async fn predict_dish(&self, image: &DynamicImage) -> Result<DishPrediction, ClassifierError> {
        self.dish_names.predict(image).await
    }

    pub async fn fetch_recipe(&self, dish: &str) -> Recipe {
        self.recipes.resolve(dish).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::food::api::SourceKind;
    use crate::food::testing::{FakeClassifier, FakeSource};

    #[tokio::test]
    async fn test_photo_to_recipe() {
        let dataset = LocalDataset::from_reader(
            "TranslatedRecipeName,TranslatedIngredients,TranslatedInstructions\n\
             Chicken Biryani,\"Rice, Chicken, Spices\",Layer and cook.\n"
                .as_bytes(),
        )
        .unwrap();
        let sources = RecipeSources::new(
            Arc::new(FakeSource::new(SourceKind::MealDb)),
            Arc::new(dataset),
            Arc::new(FakeSource::new(SourceKind::Spoonacular)),
        )
        .unwrap();
        let ensemble = ClassifierEnsemble::new(
            Arc::new(FakeClassifier::new("indian", "biryani")),
            Arc::new(FakeClassifier::new("western", "chicken_biryani")),
            Arc::new(FakeClassifier::new("general", "plate")),
        );
        let finder = DishFinder::new(ensemble, sources);

        let prediction = finder.predict_dish(&DynamicImage::new_rgb8(1, 1)).await.unwrap();
        assert_eq!(prediction.dish, "chicken biryani");

        let recipe = finder.fetch_recipe(&prediction.dish).await;
        assert_eq!(recipe.name, "Chicken Biryani");
        assert_eq!(recipe.ingredients, vec!["Rice", "Chicken", "Spices"]);
    }
}
