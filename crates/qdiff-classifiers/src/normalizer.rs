//! Question text normalization

use qdiff_core::Result;
use regex::Regex;
use std::sync::OnceLock;

const TAG_PATTERN: &str = r"<[^>]+>";
const PUNCTUATION_PATTERN: &str = r"[^\w\s\x1C-\x1F]";

/// Lowercases text, strips HTML-like tags, and removes punctuation.
///
/// Word characters and separators (whitespace and U+001C..U+001F) are
/// preserved as-is, so token boundaries survive cleaning. The output of
/// `normalize` is a fixed point: cleaning it again returns the same string.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    tag_regex: Regex,
    punctuation_regex: Regex,
}

impl TextNormalizer {
    /// Create a new normalizer
    pub fn new() -> Result<Self> {
        Ok(Self {
            tag_regex: Regex::new(TAG_PATTERN).map_err(|e| {
                qdiff_core::Error::internal(format!("Failed to compile tag regex: {}", e))
            })?,
            punctuation_regex: Regex::new(PUNCTUATION_PATTERN).map_err(|e| {
                qdiff_core::Error::internal(format!("Failed to compile punctuation regex: {}", e))
            })?,
        })
    }

    /// Clean a raw question
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let untagged = self.tag_regex.replace_all(&lowered, "");
        self.punctuation_regex.replace_all(&untagged, "").into_owned()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new().expect("Failed to create text normalizer")
    }
}

/// Clean a raw question with a process-wide normalizer
pub fn clean_text(text: &str) -> String {
    static NORMALIZER: OnceLock<TextNormalizer> = OnceLock::new();
    NORMALIZER.get_or_init(TextNormalizer::default).normalize(text)
}
