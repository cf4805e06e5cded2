use async_trait::async_trait;
use image::DynamicImage;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::config::ClassifierConfig;
use crate::providers::traits::{ClassifierError, DishClassifier};
use crate::providers::utils::encode_png;

#[derive(Debug, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub score: f64,
}

/// Image classifier served by a hosted inference endpoint.
#[derive(Clone)]
pub struct HuggingFaceClassifier {
    api_token: String,
    client: Client,
    model: String,
    api_url: String,
}

impl HuggingFaceClassifier {
    pub fn new(client: Client, api_token: String, config: ClassifierConfig) -> Self {
        Self {
            api_token,
            client,
            model: config.model,
            api_url: config.api_url,
        }
    }
}

#[async_trait]
impl DishClassifier for HuggingFaceClassifier {
    async fn classify(&self, image: &DynamicImage) -> Result<String, ClassifierError> {
        let body = encode_png(image)?;
        debug!("Sending {} byte image to {}", body.len(), self.model);

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .header("Content-Type", "image/png")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(ClassifierError::Status { status, body });
        }

        let response_json: Value = response.json().await?;
        top_label(response_json)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// Label with the highest score from an image-classification response.
pub fn top_label(response: Value) -> Result<String, ClassifierError> {
    if let Some(error) = response.get("error") {
        return Err(ClassifierError::Api(error.to_string()));
    }

    let scores: Vec<LabelScore> = serde_json::from_value(response)
        .map_err(|e| ClassifierError::InvalidResponse(e.to_string()))?;

    scores
        .into_iter()
        .fold(None, |best: Option<LabelScore>, next| match best {
            Some(b) if b.score >= next.score => Some(b),
            _ => Some(next),
        })
        .map(|best| best.label)
        .ok_or(ClassifierError::EmptyPrediction)
}
