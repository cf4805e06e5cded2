use async_trait::async_trait;
use image::DynamicImage;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("Failed to load image: {0}")]
    Image(#[from] image::ImageError),
    #[error("Failed to send request: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API request failed: Status {status}, Body: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("API returned error: {0}")]
    Api(String),
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
    #[error("Classifier returned no labels")]
    EmptyPrediction,
}

/// An image classifier that names the dish in a photo. Implementations
/// return their single best label; some models join synonyms with commas.
#[async_trait]
pub trait DishClassifier: Send + Sync {
    async fn classify(&self, image: &DynamicImage) -> Result<String, ClassifierError>;

    fn model_name(&self) -> &str;
}
