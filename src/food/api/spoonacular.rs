use async_trait::async_trait;
use log::debug;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde_json::Value;

use super::source::{json_body, RecipeSource, SourceError, SourceKind};
use crate::food::recipe::Recipe;

pub const SPOONACULAR_NO_INSTRUCTIONS: &str = "No instructions.";

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
pub struct SearchResult {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeInformation {
    pub title: String,
    #[serde(default)]
    pub extended_ingredients: Vec<ExtendedIngredient>,
    pub instructions: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExtendedIngredient {
    pub original: String,
}

impl From<RecipeInformation> for Recipe {
    fn from(info: RecipeInformation) -> Self {
        Recipe::new(
            info.title,
            info.extended_ingredients.into_iter().map(|i| i.original).collect(),
            info.instructions.unwrap_or_else(|| SPOONACULAR_NO_INSTRUCTIONS.to_string()),
        )
    }
}

#[derive(Debug, Clone)]
pub struct SpoonacularClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl SpoonacularClient {
    pub fn new(client: Client, api_key: String, base_url: impl Into<String>) -> Self {
        Self {
            client,
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn get(&self, url: String) -> RequestBuilder {
        self.client
            .get(url)
            .query(&[("apiKey", self.api_key.as_str())])
    }

    fn search_request(&self, query: &str) -> RequestBuilder {
        self.get(format!("{}/recipes/complexSearch", self.base_url))
            .query(&[("query", query), ("number", "1")])
    }

    fn information_request(&self, id: i64) -> RequestBuilder {
        self.get(format!("{}/recipes/{}/information", self.base_url, id))
    }

    async fn send_json(request: RequestBuilder) -> Result<Value, SourceError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        json_body(status, &body)
    }

    /// Id of the first search hit for `query`.
    pub async fn search_recipe_id(&self, query: &str) -> Result<i64, SourceError> {
        let data = Self::send_json(self.search_request(query)).await?;
        first_result_id(data)
    }

    pub async fn recipe_information(&self, id: i64) -> Result<Recipe, SourceError> {
        let data = Self::send_json(self.information_request(id)).await?;
        parse_information(data)
    }
}

#[async_trait]
impl RecipeSource for SpoonacularClient {
    fn kind(&self) -> SourceKind {
        SourceKind::Spoonacular
    }

    async fn lookup(&self, dish: &str) -> Result<Recipe, SourceError> {
        let id = self.search_recipe_id(dish).await?;
        debug!("Spoonacular matched '{}' to recipe {}", dish, id);
        self.recipe_information(id).await
    }
}

pub fn first_result_id(data: Value) -> Result<i64, SourceError> {
    let search: SearchResponse = serde_json::from_value(data)?;
    search
        .results
        .first()
        .map(|r| r.id)
        .ok_or(SourceError::NotFound)
}

pub fn parse_information(data: Value) -> Result<Recipe, SourceError> {
    let info: RecipeInformation = serde_json::from_value(data)?;
    Ok(info.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> SpoonacularClient {
        SpoonacularClient::new(Client::new(), "secret".to_string(), "https://api.spoonacular.com")
    }

    fn query_of(request: &reqwest::Request) -> Vec<(String, String)> {
        request.url().query_pairs().into_owned().collect()
    }

    #[test]
    fn test_search_request_params() {
        let request = client().search_request("palak paneer").build().unwrap();
        assert_eq!(request.url().path(), "/recipes/complexSearch");
        assert_eq!(
            query_of(&request),
            vec![
                ("apiKey".to_string(), "secret".to_string()),
                ("query".to_string(), "palak paneer".to_string()),
                ("number".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_information_request_path() {
        let request = client().information_request(716429).build().unwrap();
        assert_eq!(request.url().path(), "/recipes/716429/information");
        assert_eq!(
            query_of(&request),
            vec![("apiKey".to_string(), "secret".to_string())]
        );
    }

    #[test]
    fn test_empty_search_is_not_found() {
        let data = json!({ "results": [], "totalResults": 0 });
        assert!(matches!(first_result_id(data), Err(SourceError::NotFound)));
    }

    #[test]
    fn test_takes_first_result_id() {
        let data = json!({ "results": [{ "id": 716429, "title": "Pasta" }, { "id": 1 }] });
        assert_eq!(first_result_id(data).unwrap(), 716429);
    }

    #[test]
    fn test_unexpected_search_payloads() {
        // No "results" key defaults to an empty list
        let data = json!({ "status": "failure", "code": 402, "message": "quota" });
        assert!(matches!(first_result_id(data), Err(SourceError::NotFound)));

        let data = json!({ "results": "bad" });
        assert!(first_result_id(data).unwrap_err().is_unavailable());
    }

    #[test]
    fn test_information_uses_original_text() {
        let data = json!({
            "title": "Palak Paneer",
            "extendedIngredients": [
                { "original": "2 cups spinach", "name": "spinach" },
                { "original": "200 g paneer", "name": "paneer" }
            ],
            "instructions": "Blend and simmer."
        });
        let recipe = parse_information(data).unwrap();
        assert_eq!(recipe.name, "Palak Paneer");
        assert_eq!(recipe.ingredients, vec!["2 cups spinach", "200 g paneer"]);
        assert_eq!(recipe.instructions, "Blend and simmer.");
    }

    #[test]
    fn test_missing_instructions_fallback() {
        let data = json!({ "title": "Toast", "extendedIngredients": [] });
        assert_eq!(parse_information(data).unwrap().instructions, "No instructions.");

        let data = json!({ "title": "Toast", "extendedIngredients": [], "instructions": null });
        assert_eq!(parse_information(data).unwrap().instructions, "No instructions.");
    }
}
