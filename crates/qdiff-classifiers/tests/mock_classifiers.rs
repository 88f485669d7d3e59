//! Mock classifiers for testing
//!
//! Provides configurable mock implementations of the Classifier trait
//! for testing the analyzer's validation gate, confidence handling, and
//! error propagation.

use qdiff_classifiers::{
    Classifier, DifficultyAnalyzer, LabelEncoder, ModelArtifacts, ProbabilityEstimator, Scaler,
    SparseVector, TfidfVectorizer,
};
use qdiff_core::Result;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// A configurable mock classifier for testing
pub struct MockClassifier {
    name: String,
    class_index: usize,
    probabilities: Option<Vec<f64>>,
    call_count: AtomicU32,
    proba_call_count: AtomicU32,
}

impl MockClassifier {
    /// Create a new mock classifier with the given name
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            class_index: 0,
            probabilities: None,
            call_count: AtomicU32::new(0),
            proba_call_count: AtomicU32::new(0),
        }
    }

    /// Set the encoded class this classifier will predict
    pub fn with_class(mut self, class_index: usize) -> Self {
        self.class_index = class_index;
        self
    }

    /// Enable probability support with fixed probabilities
    pub fn with_probabilities(mut self, probabilities: Vec<f64>) -> Self {
        self.probabilities = Some(probabilities);
        self
    }

    /// Get the number of times predict was called
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Get the number of times predict_proba was called
    pub fn proba_call_count(&self) -> u32 {
        self.proba_call_count.load(Ordering::Relaxed)
    }
}

impl Classifier for MockClassifier {
    fn predict(&self, _features: &SparseVector) -> Result<usize> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        Ok(self.class_index)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn n_features(&self) -> usize {
        4
    }

    fn probability_estimator(&self) -> Option<&dyn ProbabilityEstimator> {
        if self.probabilities.is_some() {
            Some(self)
        } else {
            None
        }
    }
}

impl ProbabilityEstimator for MockClassifier {
    fn predict_proba(&self, _features: &SparseVector) -> Result<Vec<f64>> {
        self.proba_call_count.fetch_add(1, Ordering::Relaxed);
        Ok(self.probabilities.clone().unwrap_or_default())
    }
}

/// A classifier that always fails - for testing error paths
pub struct FailingClassifier {
    name: String,
    error_message: String,
}

impl FailingClassifier {
    /// Create a new failing classifier
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            error_message: "Simulated classifier failure".to_string(),
        }
    }

    /// Set a custom error message
    pub fn with_error(mut self, message: &str) -> Self {
        self.error_message = message.to_string();
        self
    }
}

impl Classifier for FailingClassifier {
    fn predict(&self, _features: &SparseVector) -> Result<usize> {
        Err(qdiff_core::Error::classifier(&self.error_message))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn n_features(&self) -> usize {
        4
    }
}

fn analyzer_with(classifier: Arc<dyn Classifier>, classes: &[&str]) -> DifficultyAnalyzer {
    let vocabulary: HashMap<String, usize> =
        [("integral".to_string(), 0), ("define".to_string(), 1)].into();

    let artifacts = ModelArtifacts::from_parts(
        TfidfVectorizer::from_vocabulary(vocabulary),
        Scaler::standard(vec![0.0, 0.0], vec![1.0, 1.0]),
        LabelEncoder::new(classes.iter().map(|c| c.to_string()).collect()),
        classifier,
    );
    DifficultyAnalyzer::new(Arc::new(artifacts)).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSES: [&str; 3] = ["Easy", "Hard", "Medium"];

    #[test]
    fn test_blank_input_never_reaches_classifier() {
        let mock = Arc::new(MockClassifier::new("mock").with_probabilities(vec![1.0, 0.0, 0.0]));
        let analyzer = analyzer_with(mock.clone(), &CLASSES);

        for question in ["", " ", "   ", "\t\n", "\u{3000}"] {
            let err = analyzer.analyze(question).unwrap_err();
            assert!(err.is_user_error());
        }

        assert_eq!(mock.call_count(), 0);
        assert_eq!(mock.proba_call_count(), 0);
    }

    #[test]
    fn test_confidence_is_max_probability_percent() {
        let mock = Arc::new(
            MockClassifier::new("mock")
                .with_class(1)
                .with_probabilities(vec![0.05, 0.873, 0.077]),
        );
        let analyzer = analyzer_with(mock.clone(), &CLASSES);

        let prediction = analyzer.analyze("Evaluate the integral").unwrap();

        assert_eq!(prediction.label, "Hard");
        assert!((prediction.confidence.unwrap() - 87.3).abs() < 1e-9);
        assert_eq!(mock.call_count(), 1);
        assert_eq!(mock.proba_call_count(), 1);
    }

    #[test]
    fn test_without_probabilities_skips_estimator() {
        let mock = Arc::new(MockClassifier::new("mock").with_class(2));
        let analyzer = analyzer_with(mock.clone(), &CLASSES);

        let prediction = analyzer.analyze("Define a set").unwrap();

        assert_eq!(prediction.label, "Medium");
        assert!(prediction.confidence.is_none());
        assert_eq!(mock.proba_call_count(), 0);
    }

    #[test]
    fn test_label_outside_known_levels() {
        let mock = Arc::new(MockClassifier::new("mock").with_class(0));
        let analyzer = analyzer_with(mock, &["Expert", "Novice"]);

        let prediction = analyzer.analyze("Define a set").unwrap();
        assert_eq!(prediction.label, "Expert");
        assert!(prediction.difficulty().is_none());
    }

    #[test]
    fn test_unseen_class_index_propagates() {
        let mock = Arc::new(MockClassifier::new("mock").with_class(7));
        let analyzer = analyzer_with(mock, &CLASSES);

        let err = analyzer.analyze("Define a set").unwrap_err();
        assert!(matches!(err, qdiff_core::Error::Classifier(_)));
    }

    #[test]
    fn test_failing_classifier_propagates() {
        let failing = Arc::new(FailingClassifier::new("fail-test").with_error("Custom error"));
        let analyzer = analyzer_with(failing, &CLASSES);

        let err = analyzer.analyze("Define a set").unwrap_err();
        assert_eq!(err.to_string(), "classifier error: Custom error");
    }
}
