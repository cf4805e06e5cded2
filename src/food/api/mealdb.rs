use async_trait::async_trait;
use log::debug;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;

use super::source::{json_body, RecipeSource, SourceError, SourceKind};
use crate::food::recipe::Recipe;

const MAX_INGREDIENT_SLOTS: usize = 20;

#[derive(Debug, Clone)]
pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn search_request(&self, dish: &str) -> RequestBuilder {
        self.client
            .get(format!("{}/search.php", self.base_url))
            .query(&[("s", dish)])
    }

    async fn search(&self, dish: &str) -> Result<Value, SourceError> {
        debug!("MealDB search for '{}'", dish);
        let response = self.search_request(dish).send().await?;
        let status = response.status();
        let body = response.text().await?;
        json_body(status, &body)
    }
}

#[async_trait]
impl RecipeSource for MealDbClient {
    fn kind(&self) -> SourceKind {
        SourceKind::MealDb
    }

    async fn lookup(&self, dish: &str) -> Result<Recipe, SourceError> {
        let data = self.search(dish).await?;
        parse_search_response(&data)
    }
}

/// Builds a recipe from the first meal of a `search.php` response.
pub fn parse_search_response(data: &Value) -> Result<Recipe, SourceError> {
    let meal = match data.get("meals") {
        Some(Value::Array(meals)) => meals.first().ok_or(SourceError::NotFound)?,
        Some(Value::Null) | None => return Err(SourceError::NotFound),
        Some(other) => {
            return Err(SourceError::MalformedResponse(format!(
                "expected 'meals' to be an array, got {}",
                other
            )))
        }
    };

    let name = field(meal, "strMeal")
        .ok_or_else(|| SourceError::MalformedResponse("meal has no 'strMeal'".to_string()))?;

    Ok(Recipe::new(
        name,
        collect_ingredients(meal),
        field(meal, "strInstructions").unwrap_or_default(),
    ))
}

/// Pairs `strIngredientN` with `strMeasureN` for N in 1..=20, skipping
/// empty ingredient slots. Order follows the slot index.
pub fn collect_ingredients(meal: &Value) -> Vec<String> {
    (1..=MAX_INGREDIENT_SLOTS)
        .filter_map(|i| {
            let ingredient = field(meal, &format!("strIngredient{}", i))?;
            if ingredient.trim().is_empty() {
                return None;
            }
            let measure = field(meal, &format!("strMeasure{}", i)).unwrap_or_default();
            Some(format!("{} - {}", ingredient, measure))
        })
        .collect()
}

fn field(meal: &Value, key: &str) -> Option<String> {
    meal.get(key).and_then(|v| v.as_str()).map(|s| s.to_string())
}
