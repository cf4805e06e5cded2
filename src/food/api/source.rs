use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

use crate::food::recipe::Recipe;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("No matching recipe")]
    NotFound,
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API request failed with status: {0}")]
    Status(StatusCode),
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl SourceError {
    /// Everything except a plain miss means the source could not answer.
    pub fn is_unavailable(&self) -> bool {
        !matches!(self, SourceError::NotFound)
    }
}

/// Decodes a response body, treating any non-2xx status as a failure.
pub fn json_body(status: StatusCode, body: &str) -> Result<Value, SourceError> {
    if !status.is_success() {
        return Err(SourceError::Status(status));
    }
    Ok(serde_json::from_str(body)?)
}

/// The three recipe backends, listed in lookup priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    MealDb,
    LocalDataset,
    Spoonacular,
}

impl SourceKind {
    pub const PRIORITY: [SourceKind; 3] = [
        SourceKind::MealDb,
        SourceKind::LocalDataset,
        SourceKind::Spoonacular,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::MealDb => "mealdb",
            SourceKind::LocalDataset => "csv",
            SourceKind::Spoonacular => "spoonacular",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[async_trait]
pub trait RecipeSource: Send + Sync {
    fn kind(&self) -> SourceKind;

    /// Exact, case-insensitive lookup of a dish by name.
    async fn lookup(&self, dish: &str) -> Result<Recipe, SourceError>;

    /// All recipe names the source can enumerate without a network call.
    fn known_names(&self) -> Option<&[String]> {
        None
    }
}
