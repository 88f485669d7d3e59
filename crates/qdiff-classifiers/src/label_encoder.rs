//! Fitted label encoder

use qdiff_core::Result;
use serde::{Deserialize, Serialize};

/// Bidirectional mapping between encoded class indices and labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    pub fn new(classes: Vec<String>) -> Self {
        Self { classes }
    }

    /// Labels in encoded order
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Encoded index of a label
    pub fn transform(&self, label: &str) -> Option<usize> {
        self.classes.iter().position(|c| c == label)
    }

    /// Label for an encoded index
    pub fn inverse_transform(&self, index: usize) -> Result<&str> {
        self.classes.get(index).map(String::as_str).ok_or_else(|| {
            qdiff_core::Error::classifier(format!(
                "label index {} was never seen by the label encoder ({} classes)",
                index,
                self.classes.len()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoder() -> LabelEncoder {
        serde_json::from_str(r#"{"classes": ["Easy", "Hard", "Medium"]}"#).unwrap()
    }

    #[test]
    fn test_inverse_transform() {
        let encoder = encoder();
        assert_eq!(encoder.inverse_transform(1).unwrap(), "Hard");
        assert_eq!(encoder.transform("Medium"), Some(2));
    }

    #[test]
    fn test_unseen_index() {
        let err = encoder().inverse_transform(3).unwrap_err();
        assert!(err.to_string().contains("never seen"));
    }
}
