//! Sparse feature vectors and joint feature assembly

use crate::scaler::Scaler;
use crate::vectorizer::TfidfVectorizer;
use qdiff_core::{Result, TextStatistics};

/// A single-row sparse vector with strictly ascending column indices
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SparseVector {
    dim: usize,
    indices: Vec<usize>,
    values: Vec<f64>,
}

impl SparseVector {
    /// Create an all-zero vector of the given width
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            indices: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Build from a dense row, dropping exact zeros
    pub fn from_dense(values: &[f64]) -> Self {
        let mut vector = Self::zeros(values.len());
        for (idx, &value) in values.iter().enumerate() {
            if value != 0.0 {
                vector.indices.push(idx);
                vector.values.push(value);
            }
        }
        vector
    }

    /// Build from unordered `(column, value)` pairs; duplicate columns are summed
    pub fn from_entries(dim: usize, mut entries: Vec<(usize, f64)>) -> Self {
        entries.sort_unstable_by_key(|(idx, _)| *idx);

        let mut vector = Self::zeros(dim);
        for (idx, value) in entries {
            debug_assert!(idx < dim, "column {idx} out of range for width {dim}");
            match vector.indices.last() {
                Some(&last) if last == idx => {
                    if let Some(v) = vector.values.last_mut() {
                        *v += value;
                    }
                }
                _ => {
                    vector.indices.push(idx);
                    vector.values.push(value);
                }
            }
        }
        vector
    }

    /// Number of columns
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of stored entries
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    /// Iterate stored `(column, value)` pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    /// Value at a column (zero when not stored)
    pub fn get(&self, idx: usize) -> f64 {
        match self.indices.binary_search(&idx) {
            Ok(pos) => self.values[pos],
            Err(_) => 0.0,
        }
    }

    /// Stored values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Dot product with a dense row of the same width
    pub fn dot(&self, dense: &[f64]) -> f64 {
        self.iter()
            .map(|(idx, value)| dense.get(idx).copied().unwrap_or(0.0) * value)
            .sum()
    }

    /// Scale all stored values in place
    pub fn scale(&mut self, factor: f64) {
        for value in &mut self.values {
            *value *= factor;
        }
    }

    /// Rewrite each stored value from its `(column, value)` pair
    pub fn map_values(&mut self, mut f: impl FnMut(usize, f64) -> f64) {
        for (idx, value) in self.indices.iter().zip(self.values.iter_mut()) {
            *value = f(*idx, *value);
        }
    }

    /// Horizontally concatenate `other` to the right of `self`
    pub fn hstack(mut self, other: &SparseVector) -> Self {
        let offset = self.dim;
        for (idx, value) in other.iter() {
            self.indices.push(offset + idx);
            self.values.push(value);
        }
        self.dim += other.dim;
        self
    }

    /// Expand into a dense row
    pub fn to_dense(&self) -> Vec<f64> {
        let mut dense = vec![0.0; self.dim];
        for (idx, value) in self.iter() {
            dense[idx] = value;
        }
        dense
    }
}

/// Features built for one question
#[derive(Debug, Clone)]
pub struct AssembledFeatures {
    /// Raw (unscaled) word and character counts
    pub statistics: TextStatistics,

    /// Text features followed by the two scaled numeric features
    pub joint: SparseVector,
}

/// Builds the joint feature vector from cleaned text
pub struct FeatureAssembler<'a> {
    vectorizer: &'a TfidfVectorizer,
    scaler: &'a Scaler,
}

impl<'a> FeatureAssembler<'a> {
    /// Create an assembler over fitted transforms
    pub fn new(vectorizer: &'a TfidfVectorizer, scaler: &'a Scaler) -> Self {
        Self { vectorizer, scaler }
    }

    /// Width of the joint vector this assembler produces
    pub fn output_dim(&self) -> usize {
        self.vectorizer.vocabulary_size() + self.scaler.n_features_in()
    }

    /// Vectorize, scale, and concatenate
    pub fn assemble(&self, cleaned_text: &str) -> Result<AssembledFeatures> {
        let statistics = TextStatistics::from_text(cleaned_text);

        let text_features = self.vectorizer.transform(cleaned_text);
        let numeric = self.scaler.transform(&statistics.as_features())?;
        let joint = text_features.hstack(&SparseVector::from_dense(&numeric));

        Ok(AssembledFeatures { statistics, joint })
    }
}
