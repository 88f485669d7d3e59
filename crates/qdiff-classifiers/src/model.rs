//! Serialized classifier artifact

use crate::classifier::{Classifier, ProbabilityEstimator};
use crate::features::SparseVector;
use crate::linear::{LinearSvc, LogisticRegression};
use crate::naive_bayes::MultinomialNb;
use qdiff_core::Result;
use serde::{Deserialize, Serialize};

/// Any classifier that can be stored as the model artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassifierModel {
    LogisticRegression(LogisticRegression),
    LinearSvc(LinearSvc),
    MultinomialNb(MultinomialNb),
}

impl ClassifierModel {
    fn inner(&self) -> &dyn Classifier {
        match self {
            Self::LogisticRegression(model) => model,
            Self::LinearSvc(model) => model,
            Self::MultinomialNb(model) => model,
        }
    }

    /// Check internal consistency of the fitted parameters
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::LogisticRegression(model) => model.0.validate("LogisticRegression"),
            Self::LinearSvc(model) => model.0.validate("LinearSVC"),
            Self::MultinomialNb(model) => model.validate(),
        }
    }
}

impl Classifier for ClassifierModel {
    fn predict(&self, features: &SparseVector) -> Result<usize> {
        self.inner().predict(features)
    }

    fn name(&self) -> &str {
        self.inner().name()
    }

    fn n_features(&self) -> usize {
        self.inner().n_features()
    }

    fn probability_estimator(&self) -> Option<&dyn ProbabilityEstimator> {
        match self {
            Self::LogisticRegression(model) => model.probability_estimator(),
            Self::LinearSvc(model) => model.probability_estimator(),
            Self::MultinomialNb(model) => model.probability_estimator(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_logistic_regression() {
        let model: ClassifierModel = serde_json::from_str(
            r#"{
                "kind": "logistic_regression",
                "coef": [[1.0, 0.0], [0.0, 1.0], [-1.0, -1.0]],
                "intercept": [0.0, 0.0, 0.0],
                "multi_class": "multinomial"
            }"#,
        )
        .unwrap();

        model.validate().unwrap();
        assert_eq!(model.name(), "LogisticRegression");
        assert_eq!(model.n_features(), 2);
        assert!(model.probability_estimator().is_some());
        assert_eq!(model.predict(&SparseVector::from_dense(&[0.0, 1.0])).unwrap(), 1);
    }

    #[test]
    fn test_deserialize_linear_svc_without_probabilities() {
        let model: ClassifierModel = serde_json::from_str(
            r#"{"kind": "linear_svc", "coef": [[1.0], [-1.0]], "intercept": [0.0, 0.5]}"#,
        )
        .unwrap();

        assert_eq!(model.name(), "LinearSVC");
        assert!(model.probability_estimator().is_none());
        assert_eq!(model.predict(&SparseVector::from_dense(&[1.0])).unwrap(), 0);
    }

    #[test]
    fn test_deserialize_naive_bayes() {
        let model: ClassifierModel = serde_json::from_str(
            r#"{
                "kind": "multinomial_nb",
                "class_log_prior": [-0.69, -0.69],
                "feature_log_prob": [[-0.1, -2.3], [-2.3, -0.1]]
            }"#,
        )
        .unwrap();

        model.validate().unwrap();
        assert!(model.probability_estimator().is_some());
    }

    #[test]
    fn test_unknown_kind() {
        let result: std::result::Result<ClassifierModel, _> =
            serde_json::from_str(r#"{"kind": "random_forest", "trees": []}"#);
        assert!(result.is_err());
    }
}
