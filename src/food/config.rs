use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{validate_url, ConfigError};

pub const DEFAULT_DATASET: &str = "IndianFoodDatasetCSV.csv";
pub const DEFAULT_MEALDB_URL: &str = "https://www.themealdb.com/api/json/v1/1";
pub const DEFAULT_SPOONACULAR_URL: &str = "https://api.spoonacular.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct FoodConfig {
    pub spoonacular_api_key: String,
    pub dataset_path: PathBuf,
    pub mealdb_base_url: String,
    pub spoonacular_base_url: String,
    pub request_timeout: Duration,
}

impl FoodConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let spoonacular_api_key =
            lookup("SPOONACULAR_API_KEY").ok_or(ConfigError::MissingVar("SPOONACULAR_API_KEY"))?;

        let dataset_path = lookup("RECIPE_DATASET")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET));

        let mealdb_base_url =
            lookup("MEALDB_BASE_URL").unwrap_or_else(|| DEFAULT_MEALDB_URL.to_string());
        validate_url("MEALDB_BASE_URL", &mealdb_base_url)?;

        let spoonacular_base_url =
            lookup("SPOONACULAR_BASE_URL").unwrap_or_else(|| DEFAULT_SPOONACULAR_URL.to_string());
        validate_url("SPOONACULAR_BASE_URL", &spoonacular_base_url)?;

        let request_timeout = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(value) => {
                let secs = value.trim().parse::<u64>().map_err(|_| ConfigError::InvalidNumber {
                    name: "REQUEST_TIMEOUT_SECS".to_string(),
                    value: value.clone(),
                })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            spoonacular_api_key,
            dataset_path,
            mealdb_base_url,
            spoonacular_base_url,
            request_timeout,
        })
    }
}
