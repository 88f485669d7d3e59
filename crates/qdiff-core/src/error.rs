//! Error types for the question difficulty analyzer

use std::path::PathBuf;

/// Result type alias using the analyzer's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for analyzer operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A fitted artifact could not be read, parsed, or validated
    #[error("failed to load {name} from {}: {reason}", path.display())]
    Artifact {
        name: String,
        path: PathBuf,
        reason: String,
    },

    /// Input width does not match what a fitted transform or model expects
    #[error("{component} expects {expected} features as input, but got {found}")]
    ShapeMismatch {
        component: String,
        expected: usize,
        found: usize,
    },

    /// Classifier or label decoding errors
    #[error("classifier error: {0}")]
    Classifier(String),

    /// The submitted question was empty or whitespace only
    #[error("question is empty")]
    EmptyQuestion,

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new artifact load error
    pub fn artifact(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        reason: impl std::fmt::Display,
    ) -> Self {
        Self::Artifact {
            name: name.into(),
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a new shape mismatch error
    pub fn shape_mismatch(component: impl Into<String>, expected: usize, found: usize) -> Self {
        Self::ShapeMismatch {
            component: component.into(),
            expected,
            found,
        }
    }

    /// Create a new classifier error
    pub fn classifier(msg: impl Into<String>) -> Self {
        Self::Classifier(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether the error was caused by user input rather than the model
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::EmptyQuestion)
    }
}
