//! Artifact loading
//!
//! The four fitted artifacts are read once at startup into a
//! [`ModelArtifacts`] context. The context is never mutated afterwards and
//! is shared between requests behind an `Arc`.

use crate::classifier::Classifier;
use crate::config::ArtifactConfig;
use crate::features::FeatureAssembler;
use crate::label_encoder::LabelEncoder;
use crate::model::ClassifierModel;
use crate::scaler::Scaler;
use crate::vectorizer::TfidfVectorizer;
use qdiff_core::Result;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Number of numeric features the scaler must have been fit on
pub const NUMERIC_FEATURES: usize = 2;

/// Shared, read-only artifacts
pub type SharedArtifacts = Arc<ModelArtifacts>;

/// The fitted pipeline: vectorizer, scaler, label encoder, and classifier
pub struct ModelArtifacts {
    vectorizer: TfidfVectorizer,
    scaler: Scaler,
    label_encoder: LabelEncoder,
    classifier: Arc<dyn Classifier>,
}

impl std::fmt::Debug for ModelArtifacts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelArtifacts")
            .field("vocabulary_size", &self.vectorizer.vocabulary_size())
            .field("scaler_features", &self.scaler.n_features_in())
            .field("classes", &self.label_encoder.classes())
            .field("classifier", &self.classifier.name())
            .finish()
    }
}

impl ModelArtifacts {
    /// Assemble artifacts from already-built parts
    pub fn from_parts(
        vectorizer: TfidfVectorizer,
        scaler: Scaler,
        label_encoder: LabelEncoder,
        classifier: Arc<dyn Classifier>,
    ) -> Self {
        Self {
            vectorizer,
            scaler,
            label_encoder,
            classifier,
        }
    }

    /// Load all four artifacts; any missing or malformed file fails the load
    pub fn load(config: &ArtifactConfig) -> Result<Self> {
        let start = Instant::now();
        info!("Loading model artifacts from {}", config.dir.display());

        let vectorizer: TfidfVectorizer = read_artifact("vectorizer", &config.vectorizer_path())?;

        let scaler: Scaler = read_artifact("scaler", &config.scaler_path())?;
        scaler
            .validate()
            .map_err(|e| qdiff_core::Error::artifact("scaler", config.scaler_path(), e))?;

        let label_encoder: LabelEncoder =
            read_artifact("label encoder", &config.label_encoder_path())?;
        if label_encoder.is_empty() {
            return Err(qdiff_core::Error::artifact(
                "label encoder",
                config.label_encoder_path(),
                "no classes",
            ));
        }

        let model: ClassifierModel = read_artifact("classifier", &config.model_path())?;
        model
            .validate()
            .map_err(|e| qdiff_core::Error::artifact("classifier", config.model_path(), e))?;

        let artifacts = Self::from_parts(vectorizer, scaler, label_encoder, Arc::new(model));

        for problem in artifacts.compatibility_warnings() {
            warn!("{}", problem);
        }

        info!(
            vocabulary_size = artifacts.vectorizer.vocabulary_size(),
            classes = artifacts.label_encoder.len(),
            classifier = artifacts.classifier.name(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "✓ Loaded model artifacts"
        );

        Ok(artifacts)
    }

    /// Shape disagreements between artifacts that will fail at prediction time
    pub fn compatibility_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.scaler.n_features_in() != NUMERIC_FEATURES {
            warnings.push(format!(
                "scaler was fit on {} features, but {} numeric features are produced",
                self.scaler.n_features_in(),
                NUMERIC_FEATURES
            ));
        }

        let produced = self.feature_assembler().output_dim();
        let expected = self.classifier.n_features();
        if produced != expected {
            warnings.push(format!(
                "{} expects {} features, but vectorizer and scaler produce {}",
                self.classifier.name(),
                expected,
                produced
            ));
        }

        warnings
    }

    pub fn feature_assembler(&self) -> FeatureAssembler<'_> {
        FeatureAssembler::new(&self.vectorizer, &self.scaler)
    }

    pub fn vectorizer(&self) -> &TfidfVectorizer {
        &self.vectorizer
    }

    pub fn scaler(&self) -> &Scaler {
        &self.scaler
    }

    pub fn label_encoder(&self) -> &LabelEncoder {
        &self.label_encoder
    }

    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }
}

/// Read and parse one JSON artifact, tagging failures with its name and path
fn read_artifact<T: DeserializeOwned>(name: &str, path: &Path) -> Result<T> {
    let content =
        std::fs::read_to_string(path).map_err(|e| qdiff_core::Error::artifact(name, path, e))?;
    serde_json::from_str(&content).map_err(|e| qdiff_core::Error::artifact(name, path, e))
}
