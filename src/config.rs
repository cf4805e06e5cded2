use std::env;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    MissingVar(&'static str),
    #[error("{name} is not a valid URL: {value}")]
    InvalidUrl { name: String, value: String },
    #[error("{name} is not a valid number: {value}")]
    InvalidNumber { name: String, value: String },
}

pub const HF_API_TOKEN: &str = "HF_API_TOKEN";
const HF_INFERENCE_URL: &str = "https://api-inference.huggingface.co/models";

/// The three classifiers of the ensemble, in the order they are consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierRole {
    Indian,
    Western,
    General,
}

impl ClassifierRole {
    pub fn env_prefix(&self) -> &'static str {
        match self {
            ClassifierRole::Indian => "INDIAN",
            ClassifierRole::Western => "WESTERN",
            ClassifierRole::General => "GENERAL",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            ClassifierRole::Indian => "dima806/indian_food_image_detection",
            ClassifierRole::Western => "nateraw/food",
            ClassifierRole::General => "microsoft/beit-large-patch16-224",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    pub model: String,
    pub api_url: String,
}

impl ClassifierConfig {
    pub fn from_env(role: ClassifierRole) -> Result<Self, ConfigError> {
        Self::from_lookup(role, |key| env::var(key).ok())
    }

    pub fn from_lookup<F>(role: ClassifierRole, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let prefix = role.env_prefix();

        let model = lookup(&format!("{}_MODEL", prefix))
            .unwrap_or_else(|| role.default_model().to_string());

        let url_var = format!("{}_API_URL", prefix);
        let api_url = lookup(&url_var)
            .unwrap_or_else(|| format!("{}/{}", HF_INFERENCE_URL, model));
        validate_url(&url_var, &api_url)?;

        Ok(Self { model, api_url })
    }
}

pub(crate) fn validate_url(name: &str, value: &str) -> Result<(), ConfigError> {
    Url::parse(value).map(|_| ()).map_err(|_| ConfigError::InvalidUrl {
        name: name.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_per_role() {
        let config = ClassifierConfig::from_lookup(ClassifierRole::Western, |_| None).unwrap();
        assert_eq!(config.model, "nateraw/food");
        assert_eq!(
            config.api_url,
            "https://api-inference.huggingface.co/models/nateraw/food"
        );
    }

    #[test]
    fn test_model_override_moves_default_url() {
        let vars = HashMap::from([("GENERAL_MODEL", "google/vit-base-patch16-224")]);
        let config =
            ClassifierConfig::from_lookup(ClassifierRole::General, |k| vars.get(k).map(|v| v.to_string()))
                .unwrap();
        assert_eq!(config.model, "google/vit-base-patch16-224");
        assert!(config.api_url.ends_with("/google/vit-base-patch16-224"));
    }

    #[test]
    fn test_invalid_url_rejected() {
        let vars = HashMap::from([("INDIAN_API_URL", "not a url")]);
        let err = ClassifierConfig::from_lookup(ClassifierRole::Indian, |k| vars.get(k).map(|v| v.to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
    }
}
