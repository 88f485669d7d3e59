//! Question analysis pipeline
//!
//! One question flows through the stages in order:
//! - validation (empty or whitespace-only input is rejected)
//! - text normalization
//! - feature assembly (vectorize, scale counts, concatenate)
//! - prediction and, when supported, probability estimation
//! - label decoding

use crate::artifacts::SharedArtifacts;
use crate::classifier::ProbabilityEstimator;
use crate::features::SparseVector;
use crate::normalizer::TextNormalizer;
use qdiff_core::{Prediction, Result};
use std::time::Instant;
use tracing::debug;

/// Runs questions through the loaded artifacts
#[derive(Debug, Clone)]
pub struct DifficultyAnalyzer {
    artifacts: SharedArtifacts,
    normalizer: TextNormalizer,
}

impl DifficultyAnalyzer {
    /// Create an analyzer over loaded artifacts
    pub fn new(artifacts: SharedArtifacts) -> Result<Self> {
        Ok(Self {
            artifacts,
            normalizer: TextNormalizer::new()?,
        })
    }

    pub fn artifacts(&self) -> &SharedArtifacts {
        &self.artifacts
    }

    /// Predict the difficulty of one question
    pub fn analyze(&self, question: &str) -> Result<Prediction> {
        if qdiff_core::is_blank(question) {
            metrics::counter!("qdiff_rejections_total").increment(1);
            return Err(qdiff_core::Error::EmptyQuestion);
        }

        let start = Instant::now();

        let cleaned_text = self.normalizer.normalize(question);
        let features = self.artifacts.feature_assembler().assemble(&cleaned_text)?;

        let classifier = self.artifacts.classifier();
        let class_index = classifier.predict(&features.joint)?;
        let label = self
            .artifacts
            .label_encoder()
            .inverse_transform(class_index)?
            .to_string();

        let probabilities = match classifier.probability_estimator() {
            Some(estimator) => Some(self.labelled_probabilities(estimator, &features.joint)?),
            None => None,
        };
        let confidence = probabilities
            .as_ref()
            .and_then(|probs| probs.iter().map(|(_, p)| *p).reduce(f64::max))
            .map(|max| max * 100.0);

        let latency_us = start.elapsed().as_micros() as u64;

        debug!(
            label = %label,
            confidence = ?confidence,
            words = features.statistics.word_count,
            chars = features.statistics.char_count,
            latency_us,
            "Question analyzed"
        );
        metrics::counter!("qdiff_predictions_total", "label" => label.clone()).increment(1);
        metrics::histogram!("qdiff_pipeline_latency_us").record(latency_us as f64);

        Ok(Prediction {
            label,
            class_index,
            confidence,
            probabilities,
            statistics: features.statistics,
            cleaned_text,
            latency_us,
        })
    }

    /// Pair each probability with the label of the class its row encodes
    fn labelled_probabilities(
        &self,
        estimator: &dyn ProbabilityEstimator,
        features: &SparseVector,
    ) -> Result<Vec<(String, f64)>> {
        let probabilities = estimator.predict_proba(features)?;
        let classes = estimator.classes();
        let label_encoder = self.artifacts.label_encoder();

        probabilities
            .into_iter()
            .enumerate()
            .map(|(row, p)| {
                let class_index = match classes {
                    Some(classes) => *classes.get(row).ok_or_else(|| {
                        qdiff_core::Error::classifier(format!(
                            "probability row {row} has no class"
                        ))
                    })?,
                    None => row,
                };
                let label = label_encoder.inverse_transform(class_index)?;
                Ok((label.to_string(), p))
            })
            .collect()
    }
}
