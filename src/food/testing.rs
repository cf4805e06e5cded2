//! Test doubles for recipe sources and classifiers.

use async_trait::async_trait;
use image::DynamicImage;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::food::api::{RecipeSource, SourceError, SourceKind};
use crate::food::recipe::Recipe;
use crate::providers::traits::{ClassifierError, DishClassifier};

/// In-memory recipe source that records every lookup it receives.
pub struct FakeSource {
    kind: SourceKind,
    recipes: HashMap<String, Recipe>,
    names: Option<Vec<String>>,
    unavailable: bool,
    lookups: Arc<Mutex<Vec<String>>>,
}

impl FakeSource {
    pub fn new(kind: SourceKind) -> Self {
        Self {
            kind,
            recipes: HashMap::new(),
            names: None,
            unavailable: false,
            lookups: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A source whose every lookup fails as if the network were down.
    pub fn unavailable(kind: SourceKind) -> Self {
        Self {
            unavailable: true,
            ..Self::new(kind)
        }
    }

    pub fn with_recipe(mut self, name: &str, ingredients: &[&str], instructions: &str) -> Self {
        let recipe = Recipe::new(
            name,
            ingredients.iter().map(|s| s.to_string()).collect(),
            instructions,
        );
        self.recipes.insert(name.to_lowercase(), recipe);
        self
    }

    /// Exposes the recipe names as an enumerable corpus.
    pub fn enumerable(mut self) -> Self {
        let mut names: Vec<String> = self.recipes.values().map(|r| r.name.clone()).collect();
        names.sort();
        self.names = Some(names);
        self
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl RecipeSource for FakeSource {
    fn kind(&self) -> SourceKind {
        self.kind
    }

    async fn lookup(&self, dish: &str) -> Result<Recipe, SourceError> {
        if let Ok(mut lookups) = self.lookups.lock() {
            lookups.push(dish.to_string());
        }
        if self.unavailable {
            return Err(SourceError::MalformedResponse("simulated outage".to_string()));
        }
        self.recipes
            .get(&dish.to_lowercase())
            .cloned()
            .ok_or(SourceError::NotFound)
    }

    fn known_names(&self) -> Option<&[String]> {
        self.names.as_deref()
    }
}

/// Classifier returning a fixed label, or always failing.
pub struct FakeClassifier {
    name: String,
    label: Option<String>,
    calls: Arc<Mutex<usize>>,
}

impl FakeClassifier {
    pub fn new(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: Some(label.to_string()),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn failing(name: &str) -> Self {
        Self {
            name: name.to_string(),
            label: None,
            calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl DishClassifier for FakeClassifier {
    async fn classify(&self, _image: &DynamicImage) -> Result<String, ClassifierError> {
        if let Ok(mut calls) = self.calls.lock() {
            *calls += 1;
        }
        self.label.clone().ok_or(ClassifierError::EmptyPrediction)
    }

    fn model_name(&self) -> &str {
        &self.name
    }
}
