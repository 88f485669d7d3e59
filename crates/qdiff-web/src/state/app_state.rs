use crate::config::AppConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use qdiff_classifiers::{ArtifactConfig, DifficultyAnalyzer, ModelArtifacts};
use std::sync::Arc;
use tracing::error;

/// Whether the fitted artifacts could be loaded at startup
#[derive(Debug)]
pub enum ModelStatus {
    /// Artifacts loaded; questions can be analyzed
    Ready(DifficultyAnalyzer),

    /// Loading failed; the error is shown instead of the form
    Unavailable {
        error: String,
        expected_files: Vec<String>,
    },
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Loaded analyzer, or the reason it is missing
    pub model: Arc<ModelStatus>,

    /// Prometheus handle for rendering `/metrics`
    pub metrics_handle: Option<PrometheusHandle>,

    /// Maximum accepted request body size
    pub body_limit_bytes: usize,
}

impl AppState {
    /// Load artifacts once; a failed load still yields a serving state
    pub fn load(config: &AppConfig, metrics_handle: Option<PrometheusHandle>) -> Self {
        let model = match ModelArtifacts::load(&config.artifacts)
            .and_then(|artifacts| DifficultyAnalyzer::new(Arc::new(artifacts)))
        {
            Ok(analyzer) => ModelStatus::Ready(analyzer),
            Err(e) => {
                error!("Failed to load model artifacts: {}", e);
                ModelStatus::Unavailable {
                    error: e.to_string(),
                    expected_files: expected_files(&config.artifacts),
                }
            }
        };

        Self {
            model: Arc::new(model),
            metrics_handle,
            body_limit_bytes: config.server.body_limit_bytes,
        }
    }

    /// State around an already-built analyzer
    pub fn with_analyzer(analyzer: DifficultyAnalyzer) -> Self {
        Self {
            model: Arc::new(ModelStatus::Ready(analyzer)),
            metrics_handle: None,
            body_limit_bytes: AppConfig::default().server.body_limit_bytes,
        }
    }

    /// State for a server whose artifacts failed to load
    pub fn unavailable(error: impl Into<String>, artifacts: &ArtifactConfig) -> Self {
        Self {
            model: Arc::new(ModelStatus::Unavailable {
                error: error.into(),
                expected_files: expected_files(artifacts),
            }),
            metrics_handle: None,
            body_limit_bytes: AppConfig::default().server.body_limit_bytes,
        }
    }

    pub fn analyzer(&self) -> Option<&DifficultyAnalyzer> {
        match self.model.as_ref() {
            ModelStatus::Ready(analyzer) => Some(analyzer),
            ModelStatus::Unavailable { .. } => None,
        }
    }

    pub fn is_model_loaded(&self) -> bool {
        self.analyzer().is_some()
    }
}

fn expected_files(config: &ArtifactConfig) -> Vec<String> {
    config
        .file_names()
        .iter()
        .map(|name| config.dir.join(name).display().to_string())
        .collect()
}
