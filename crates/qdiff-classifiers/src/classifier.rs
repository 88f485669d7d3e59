//! Classifier trait and probability capability

use crate::features::SparseVector;
use qdiff_core::Result;

/// Trait for all fitted classifiers
pub trait Classifier: Send + Sync {
    /// Predict the encoded class for one sample
    fn predict(&self, features: &SparseVector) -> Result<usize>;

    /// Get the classifier name
    fn name(&self) -> &str;

    /// Number of input columns the model was fit on
    fn n_features(&self) -> usize;

    /// Probability estimation, when the model supports it
    fn probability_estimator(&self) -> Option<&dyn ProbabilityEstimator> {
        None
    }
}

/// Capability of estimating per-class probabilities
pub trait ProbabilityEstimator: Send + Sync {
    /// Probabilities for one sample, in the model's class order
    fn predict_proba(&self, features: &SparseVector) -> Result<Vec<f64>>;

    /// Encoded label of each probability row; `None` means `0..n_classes`
    fn classes(&self) -> Option<&[usize]> {
        None
    }
}

/// Fail with a shape mismatch when `features` is not `expected` columns wide
pub fn check_width(name: &str, expected: usize, features: &SparseVector) -> Result<()> {
    if features.dim() != expected {
        return Err(qdiff_core::Error::shape_mismatch(
            name,
            expected,
            features.dim(),
        ));
    }
    Ok(())
}

/// Index of the largest value; ties resolve to the first
pub(crate) fn argmax(values: &[f64]) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (idx, &value)| match best {
            Some((_, best_value)) if best_value >= value => best,
            _ => Some((idx, value)),
        })
        .map(|(idx, _)| idx)
}

/// Numerically stable softmax
pub(crate) fn softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

pub(crate) fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
