//! Multinomial naive Bayes

use crate::classifier::{argmax, check_width, softmax, Classifier, ProbabilityEstimator};
use crate::features::SparseVector;
use qdiff_core::Result;
use serde::{Deserialize, Serialize};

/// Fitted multinomial naive Bayes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultinomialNb {
    /// Log prior per class
    pub class_log_prior: Vec<f64>,

    /// Log probability of each feature given a class (classes × features)
    pub feature_log_prob: Vec<Vec<f64>>,

    /// Encoded label for each output class; defaults to `0..n_classes`
    #[serde(default)]
    pub classes: Option<Vec<usize>>,
}

impl MultinomialNb {
    pub fn validate(&self) -> Result<()> {
        let n_classes = self.class_log_prior.len();
        if n_classes == 0 {
            return Err(qdiff_core::Error::config(format!(
                "{} has no classes",
                self.name()
            )));
        }
        if self.feature_log_prob.len() != n_classes {
            return Err(qdiff_core::Error::shape_mismatch(
                "MultinomialNB feature_log_prob",
                n_classes,
                self.feature_log_prob.len(),
            ));
        }

        let width = self.n_features();
        if let Some(row) = self.feature_log_prob.iter().find(|row| row.len() != width) {
            return Err(qdiff_core::Error::shape_mismatch(
                "MultinomialNB feature_log_prob row",
                width,
                row.len(),
            ));
        }

        if let Some(classes) = &self.classes {
            if classes.len() != n_classes {
                return Err(qdiff_core::Error::shape_mismatch(
                    "MultinomialNB classes",
                    n_classes,
                    classes.len(),
                ));
            }
        }
        Ok(())
    }

    fn joint_log_likelihood(&self, features: &SparseVector) -> Result<Vec<f64>> {
        check_width(self.name(), self.n_features(), features)?;

        if features.values().iter().any(|v| *v < 0.0) {
            return Err(qdiff_core::Error::classifier(
                "Negative values in data passed to MultinomialNB (input X)",
            ));
        }

        Ok(self
            .feature_log_prob
            .iter()
            .zip(&self.class_log_prior)
            .map(|(row, prior)| features.dot(row) + prior)
            .collect())
    }
}

impl Classifier for MultinomialNb {
    fn predict(&self, features: &SparseVector) -> Result<usize> {
        let jll = self.joint_log_likelihood(features)?;
        let position =
            argmax(&jll).ok_or_else(|| qdiff_core::Error::classifier("no class scores"))?;

        Ok(self
            .classes
            .as_ref()
            .and_then(|classes| classes.get(position).copied())
            .unwrap_or(position))
    }

    fn name(&self) -> &str {
        "MultinomialNB"
    }

    fn n_features(&self) -> usize {
        self.feature_log_prob.first().map_or(0, Vec::len)
    }

    fn probability_estimator(&self) -> Option<&dyn ProbabilityEstimator> {
        Some(self)
    }
}

impl ProbabilityEstimator for MultinomialNb {
    fn predict_proba(&self, features: &SparseVector) -> Result<Vec<f64>> {
        Ok(softmax(&self.joint_log_likelihood(features)?))
    }

    fn classes(&self) -> Option<&[usize]> {
        self.classes.as_deref()
    }
}
