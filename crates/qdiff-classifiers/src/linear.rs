//! Linear classifiers: logistic regression and linear SVM

use crate::classifier::{argmax, check_width, sigmoid, softmax, Classifier, ProbabilityEstimator};
use crate::features::SparseVector;
use qdiff_core::Result;
use serde::{Deserialize, Serialize};

/// How multi-class logistic scores become probabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MultiClass {
    /// Softmax over all class scores
    #[default]
    Multinomial,
    /// Independent sigmoids, renormalized
    Ovr,
}

/// Fitted weights shared by the linear models.
///
/// `coef` has one row per class, or a single row for a binary problem where
/// a positive score selects the second class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub coef: Vec<Vec<f64>>,
    pub intercept: Vec<f64>,

    /// Encoded label for each output class; defaults to `0..n_classes`
    #[serde(default)]
    pub classes: Option<Vec<usize>>,

    #[serde(default)]
    pub multi_class: MultiClass,
}

impl LinearModel {
    pub fn new(coef: Vec<Vec<f64>>, intercept: Vec<f64>) -> Self {
        Self {
            coef,
            intercept,
            classes: None,
            multi_class: MultiClass::default(),
        }
    }

    pub fn n_features(&self) -> usize {
        self.coef.first().map_or(0, Vec::len)
    }

    pub fn n_classes(&self) -> usize {
        match self.coef.len() {
            1 => 2,
            rows => rows,
        }
    }

    fn is_binary(&self) -> bool {
        self.coef.len() == 1
    }

    /// Check that the weight matrix, intercepts, and class list agree
    pub fn validate(&self, name: &str) -> Result<()> {
        if self.coef.is_empty() {
            return Err(qdiff_core::Error::config(format!(
                "{name} has an empty coefficient matrix"
            )));
        }

        let width = self.n_features();
        if let Some(row) = self.coef.iter().find(|row| row.len() != width) {
            return Err(qdiff_core::Error::shape_mismatch(
                format!("{name} coefficient row"),
                width,
                row.len(),
            ));
        }

        if self.intercept.len() != self.coef.len() {
            return Err(qdiff_core::Error::shape_mismatch(
                format!("{name} intercept"),
                self.coef.len(),
                self.intercept.len(),
            ));
        }

        if let Some(classes) = &self.classes {
            if classes.len() != self.n_classes() {
                return Err(qdiff_core::Error::shape_mismatch(
                    format!("{name} classes"),
                    self.n_classes(),
                    classes.len(),
                ));
            }
        }

        Ok(())
    }

    /// Raw per-row scores `coef · x + intercept`
    pub fn decision_function(&self, name: &str, features: &SparseVector) -> Result<Vec<f64>> {
        check_width(name, self.n_features(), features)?;

        Ok(self
            .coef
            .iter()
            .zip(&self.intercept)
            .map(|(row, bias)| features.dot(row) + bias)
            .collect())
    }

    fn predict(&self, name: &str, features: &SparseVector) -> Result<usize> {
        let scores = self.decision_function(name, features)?;

        let position = if self.is_binary() {
            usize::from(binary_score(&scores)? > 0.0)
        } else {
            argmax(&scores).ok_or_else(|| qdiff_core::Error::classifier("no class scores"))?
        };

        Ok(self.class_at(position))
    }

    fn class_at(&self, position: usize) -> usize {
        self.classes
            .as_ref()
            .and_then(|classes| classes.get(position).copied())
            .unwrap_or(position)
    }
}

/// Fitted logistic regression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogisticRegression(pub LinearModel);

impl Classifier for LogisticRegression {
    fn predict(&self, features: &SparseVector) -> Result<usize> {
        self.0.predict(self.name(), features)
    }

    fn name(&self) -> &str {
        "LogisticRegression"
    }

    fn n_features(&self) -> usize {
        self.0.n_features()
    }

    fn probability_estimator(&self) -> Option<&dyn ProbabilityEstimator> {
        Some(self)
    }
}

impl ProbabilityEstimator for LogisticRegression {
    fn predict_proba(&self, features: &SparseVector) -> Result<Vec<f64>> {
        let scores = self.0.decision_function(self.name(), features)?;

        if self.0.is_binary() {
            let p = sigmoid(binary_score(&scores)?);
            return Ok(vec![1.0 - p, p]);
        }

        Ok(match self.0.multi_class {
            MultiClass::Multinomial => softmax(&scores),
            MultiClass::Ovr => {
                let raw: Vec<f64> = scores.iter().map(|&s| sigmoid(s)).collect();
                let sum: f64 = raw.iter().sum();
                raw.into_iter().map(|p| p / sum).collect()
            }
        })
    }

    fn classes(&self) -> Option<&[usize]> {
        self.0.classes.as_deref()
    }
}

/// The single score of a binary model
fn binary_score(scores: &[f64]) -> Result<f64> {
    scores
        .first()
        .copied()
        .ok_or_else(|| qdiff_core::Error::classifier("no class scores"))
}

/// Fitted linear support vector classifier; decision only, no probabilities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinearSvc(pub LinearModel);

impl Classifier for LinearSvc {
    fn predict(&self, features: &SparseVector) -> Result<usize> {
        self.0.predict(self.name(), features)
    }

    fn name(&self) -> &str {
        "LinearSVC"
    }

    fn n_features(&self) -> usize {
        self.0.n_features()
    }
}
