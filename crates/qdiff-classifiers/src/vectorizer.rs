//! Fitted TF-IDF text vectorizer
//!
//! The vectorizer is loaded from its fitted parameters: the vocabulary
//! (term to column), the inverse document frequencies, and the analysis
//! settings it was fit with. It maps cleaned text to a sparse row whose
//! width equals the vocabulary size.

use crate::features::SparseVector;
use qdiff_core::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

/// Default token pattern: runs of two or more word characters
pub const DEFAULT_TOKEN_PATTERN: &str = r"(?u)\b\w\w+\b";

/// Row normalization applied after weighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    L1,
    L2,
}

/// Fitted vectorizer parameters as stored on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerParams {
    /// Term to column index
    pub vocabulary: HashMap<String, usize>,

    /// Inverse document frequency per column; absent for plain term counts
    #[serde(default)]
    pub idf: Option<Vec<f64>>,

    #[serde(default = "default_true")]
    pub lowercase: bool,

    #[serde(default = "default_token_pattern")]
    pub token_pattern: String,

    /// Inclusive `[min_n, max_n]` word n-gram range
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),

    #[serde(default)]
    pub stop_words: Option<Vec<String>>,

    #[serde(default)]
    pub binary: bool,

    #[serde(default)]
    pub sublinear_tf: bool,

    #[serde(default = "default_norm")]
    pub norm: Option<Norm>,
}

/// TF-IDF vectorizer ready for inference
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "VectorizerParams", into = "VectorizerParams")]
pub struct TfidfVectorizer {
    params: VectorizerParams,
    token_regex: Regex,
    stop_words: HashSet<String>,
}

impl TfidfVectorizer {
    /// Create a term-count vectorizer with default analysis settings
    pub fn from_vocabulary(vocabulary: HashMap<String, usize>) -> Self {
        let params = VectorizerParams {
            vocabulary,
            idf: None,
            lowercase: true,
            token_pattern: default_token_pattern(),
            ngram_range: default_ngram_range(),
            stop_words: None,
            binary: false,
            sublinear_tf: false,
            norm: default_norm(),
        };
        Self::try_from(params).expect("default vectorizer settings are valid")
    }

    /// Number of output columns
    pub fn vocabulary_size(&self) -> usize {
        self.params.vocabulary.len()
    }

    /// Fitted parameters
    pub fn params(&self) -> &VectorizerParams {
        &self.params
    }

    /// Split text into the terms the vocabulary was built from
    pub fn analyze(&self, text: &str) -> Vec<String> {
        let text = if self.params.lowercase {
            Cow::Owned(text.to_lowercase())
        } else {
            Cow::Borrowed(text)
        };

        let tokens: Vec<&str> = if self.token_regex.captures_len() > 1 {
            self.token_regex
                .captures_iter(&text)
                .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
                .collect()
        } else {
            self.token_regex
                .find_iter(&text)
                .map(|m| m.as_str())
                .collect()
        };

        let tokens: Vec<&str> = tokens
            .into_iter()
            .filter(|token| !self.stop_words.contains(*token))
            .collect();

        word_ngrams(&tokens, self.params.ngram_range)
    }

    /// Map text to a weighted, normalized sparse row
    pub fn transform(&self, text: &str) -> SparseVector {
        let entries: Vec<(usize, f64)> = self
            .analyze(text)
            .iter()
            .filter_map(|term| self.params.vocabulary.get(term).map(|&idx| (idx, 1.0)))
            .collect();

        let mut row = SparseVector::from_entries(self.vocabulary_size(), entries);

        if self.params.binary {
            row.map_values(|_, _| 1.0);
        }
        if self.params.sublinear_tf {
            row.map_values(|_, tf| 1.0 + tf.ln());
        }
        if let Some(idf) = &self.params.idf {
            row.map_values(|idx, tf| tf * idf[idx]);
        }

        let norm = match self.params.norm {
            Some(Norm::L2) => row.values().iter().map(|v| v * v).sum::<f64>().sqrt(),
            Some(Norm::L1) => row.values().iter().map(|v| v.abs()).sum::<f64>(),
            None => 0.0,
        };
        if norm > 0.0 {
            row.scale(1.0 / norm);
        }

        row
    }
}

impl TryFrom<VectorizerParams> for TfidfVectorizer {
    type Error = qdiff_core::Error;

    fn try_from(params: VectorizerParams) -> Result<Self> {
        let size = params.vocabulary.len();

        if let Some((term, idx)) = params.vocabulary.iter().find(|&(_, &idx)| idx >= size) {
            return Err(qdiff_core::Error::config(format!(
                "vocabulary term '{}' maps to column {} but the vocabulary has {} columns",
                term, idx, size
            )));
        }

        if let Some(idf) = &params.idf {
            if idf.len() != size {
                return Err(qdiff_core::Error::shape_mismatch("idf", size, idf.len()));
            }
        }

        let (min_n, max_n) = params.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(qdiff_core::Error::config(format!(
                "invalid ngram_range ({}, {})",
                min_n, max_n
            )));
        }

        let token_regex = Regex::new(&params.token_pattern).map_err(|e| {
            qdiff_core::Error::config(format!("Failed to compile token pattern: {}", e))
        })?;
        if token_regex.captures_len() > 2 {
            return Err(qdiff_core::Error::config(
                "token pattern may contain at most one capturing group",
            ));
        }

        let stop_words = params.stop_words.iter().flatten().cloned().collect();

        Ok(Self {
            params,
            token_regex,
            stop_words,
        })
    }
}

impl From<TfidfVectorizer> for VectorizerParams {
    fn from(vectorizer: TfidfVectorizer) -> Self {
        vectorizer.params
    }
}

fn word_ngrams(tokens: &[&str], (min_n, max_n): (usize, usize)) -> Vec<String> {
    let mut terms = Vec::new();
    let mut start_n = min_n;

    if min_n == 1 {
        terms.extend(tokens.iter().map(|t| t.to_string()));
        start_n = 2;
    }

    for n in start_n..=max_n.min(tokens.len()) {
        terms.extend(tokens.windows(n).map(|window| window.join(" ")));
    }

    terms
}

fn default_true() -> bool {
    true
}

fn default_token_pattern() -> String {
    DEFAULT_TOKEN_PATTERN.to_string()
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

fn default_norm() -> Option<Norm> {
    Some(Norm::L2)
}
