//! Question Difficulty Classifiers
//!
//! Inference-only text classification for exam questions.
//!
//! A question is cleaned, turned into TF-IDF features plus two scaled length
//! features (word count and character count), and passed to a fitted
//! classifier. All fitted parameters come from four JSON artifacts loaded
//! once at startup:
//! - the text vectorizer (vocabulary and inverse document frequencies)
//! - the numeric feature scaler
//! - the label encoder (class index to difficulty label)
//! - the classifier (logistic regression, linear SVM, or multinomial naive Bayes)

pub mod artifacts;
pub mod classifier;
pub mod config;
pub mod features;
pub mod label_encoder;
pub mod linear;
pub mod model;
pub mod naive_bayes;
pub mod normalizer;
pub mod pipeline;
pub mod scaler;
pub mod vectorizer;

pub use artifacts::{ModelArtifacts, SharedArtifacts, NUMERIC_FEATURES};
pub use classifier::{Classifier, ProbabilityEstimator};
pub use config::ArtifactConfig;
pub use features::{AssembledFeatures, FeatureAssembler, SparseVector};
pub use label_encoder::LabelEncoder;
pub use linear::{LinearModel, LinearSvc, LogisticRegression, MultiClass};
pub use model::ClassifierModel;
pub use naive_bayes::MultinomialNb;
pub use normalizer::{clean_text, TextNormalizer};
pub use pipeline::DifficultyAnalyzer;
pub use scaler::Scaler;
pub use vectorizer::{Norm, TfidfVectorizer, VectorizerParams};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::artifacts::{ModelArtifacts, SharedArtifacts};
    pub use crate::classifier::{Classifier, ProbabilityEstimator};
    pub use crate::config::ArtifactConfig;
    pub use crate::pipeline::DifficultyAnalyzer;
}
