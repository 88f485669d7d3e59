//! Core types for the question difficulty analyzer

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of difficulty levels the analyzer knows how to present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All known levels, easiest first
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Parse a predicted label, returning `None` for labels outside the known set
    pub fn from_label(label: &str) -> Option<Self> {
        label.parse().ok()
    }

    /// Label as produced by the label encoder
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Emoji shown next to the label
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Easy => "🟢",
            Self::Medium => "🟠",
            Self::Hard => "🔴",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Easy" => Ok(Self::Easy),
            "Medium" => Ok(Self::Medium),
            "Hard" => Ok(Self::Hard),
            other => Err(format!("unknown difficulty label: {other}")),
        }
    }
}

/// Whitespace as far as word splitting is concerned.
///
/// Unicode whitespace plus the ASCII information separators U+001C..U+001F,
/// which Python's `str.split` also breaks on.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// True when `text` has nothing but separators
pub fn is_blank(text: &str) -> bool {
    text.chars().all(is_separator)
}

/// Basic statistics computed over the cleaned question text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextStatistics {
    /// Number of separator-delimited words
    pub word_count: usize,

    /// Number of characters (Unicode scalar values)
    pub char_count: usize,
}

impl TextStatistics {
    /// Compute statistics for already-cleaned text
    pub fn from_text(text: &str) -> Self {
        Self {
            word_count: text
                .split(is_separator)
                .filter(|word| !word.is_empty())
                .count(),
            char_count: text.chars().count(),
        }
    }

    /// The statistics as the two-element numeric feature row
    pub fn as_features(&self) -> [f64; 2] {
        [self.word_count as f64, self.char_count as f64]
    }
}

/// Outcome of running one question through the pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Human-readable label from the label encoder
    pub label: String,

    /// Encoded class index returned by the classifier
    pub class_index: usize,

    /// Max class probability in percent, when the classifier supports it
    pub confidence: Option<f64>,

    /// Per-class probabilities, label order matching the label encoder
    pub probabilities: Option<Vec<(String, f64)>>,

    /// Word and character counts of the cleaned text
    pub statistics: TextStatistics,

    /// The normalized text the features were built from
    pub cleaned_text: String,

    /// Pipeline latency in microseconds
    pub latency_us: u64,
}

impl Prediction {
    /// The label as a known difficulty level, if it is one
    pub fn difficulty(&self) -> Option<Difficulty> {
        Difficulty::from_label(&self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_round_trip_labels() {
        for level in Difficulty::ALL {
            assert_eq!(Difficulty::from_label(level.as_str()), Some(level));
        }
        assert_eq!(Difficulty::from_label("hard"), None);
        assert_eq!(Difficulty::from_label("Expert"), None);
    }

    #[test]
    fn test_difficulty_emoji() {
        assert_eq!(Difficulty::Easy.emoji(), "🟢");
        assert_eq!(Difficulty::Medium.emoji(), "🟠");
        assert_eq!(Difficulty::Hard.emoji(), "🔴");
    }

    #[test]
    fn test_text_statistics() {
        let stats = TextStatistics::from_text("what is 22");
        assert_eq!(stats.word_count, 3);
        assert_eq!(stats.char_count, 10);
        assert_eq!(stats.as_features(), [3.0, 10.0]);
    }

    #[test]
    fn test_information_separators_split_words() {
        let stats = TextStatistics::from_text("define\x1centropy\x1f");
        assert_eq!(stats.word_count, 2);
        assert_eq!(stats.char_count, 15);

        assert!(is_blank(""));
        assert!(is_blank(" \x1c\x1d\x1e\x1f\t"));
        assert!(!is_blank("\x1c?"));
    }

    #[test]
    fn test_text_statistics_counts_chars_not_bytes() {
        let stats = TextStatistics::from_text("  déjà   vu ");
        assert_eq!(stats.word_count, 2);
        assert_eq!(stats.char_count, 12);
    }

    #[test]
    fn test_text_statistics_empty() {
        assert_eq!(TextStatistics::from_text(""), TextStatistics::default());
    }
}
