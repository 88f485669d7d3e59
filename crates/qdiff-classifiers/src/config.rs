//! Configuration for locating the fitted artifacts

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the four fitted artifacts live on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactConfig {
    /// Directory holding the artifacts
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// Text vectorizer file name
    #[serde(default = "default_vectorizer")]
    pub vectorizer: String,

    /// Numeric feature scaler file name
    #[serde(default = "default_scaler")]
    pub scaler: String,

    /// Label encoder file name
    #[serde(default = "default_label_encoder")]
    pub label_encoder: String,

    /// Classifier file name
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            vectorizer: default_vectorizer(),
            scaler: default_scaler(),
            label_encoder: default_label_encoder(),
            model: default_model(),
        }
    }
}

impl ArtifactConfig {
    /// Default file names under a different directory
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Default::default()
        }
    }

    pub fn vectorizer_path(&self) -> PathBuf {
        self.dir.join(&self.vectorizer)
    }

    pub fn scaler_path(&self) -> PathBuf {
        self.dir.join(&self.scaler)
    }

    pub fn label_encoder_path(&self) -> PathBuf {
        self.dir.join(&self.label_encoder)
    }

    pub fn model_path(&self) -> PathBuf {
        self.dir.join(&self.model)
    }

    /// File names in load order, for user-facing hints
    pub fn file_names(&self) -> [&str; 4] {
        [
            &self.vectorizer,
            &self.scaler,
            &self.label_encoder,
            &self.model,
        ]
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from("artifacts")
}

fn default_vectorizer() -> String {
    "vectorizer.json".to_string()
}

fn default_scaler() -> String {
    "scaler.json".to_string()
}

fn default_label_encoder() -> String {
    "label_encoder.json".to_string()
}

fn default_model() -> String {
    "best_model.json".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ArtifactConfig::default();
        assert_eq!(config.model_path(), PathBuf::from("artifacts/best_model.json"));
        assert_eq!(
            config.file_names(),
            ["vectorizer.json", "scaler.json", "label_encoder.json", "best_model.json"]
        );
    }

    #[test]
    fn test_partial_override() {
        let config: ArtifactConfig =
            serde_json::from_str(r#"{"dir": "/srv/models", "model": "svc.json"}"#).unwrap();
        assert_eq!(config.model_path(), PathBuf::from("/srv/models/svc.json"));
        assert_eq!(
            config.vectorizer_path(),
            PathBuf::from("/srv/models/vectorizer.json")
        );
    }
}
