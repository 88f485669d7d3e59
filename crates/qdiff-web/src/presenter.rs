//! Result presentation
//!
//! Turns a [`Prediction`] into what the user sees: the label with its emoji,
//! a confidence line, and the text statistics. Everything here is pure
//! formatting; any text that came from the user is escaped before it is
//! placed into HTML.

use qdiff_core::{Difficulty, Prediction};
use serde::Serialize;
use std::fmt::Write;

/// Emoji used for labels outside the known difficulty levels
pub const UNKNOWN_EMOJI: &str = "⚪";

/// Shown instead of a result when the submitted question is blank
pub const EMPTY_QUESTION_WARNING: &str = "⚠️ Please enter a question to analyze.";

/// Emoji for a predicted label
pub fn emoji_for(label: &str) -> &'static str {
    Difficulty::from_label(label)
        .map(|d| d.emoji())
        .unwrap_or(UNKNOWN_EMOJI)
}

/// Confidence line, empty when the classifier has no probabilities
pub fn confidence_text(confidence: Option<f64>) -> String {
    confidence
        .map(|c| format!("Confidence Score: {:.1}%", c))
        .unwrap_or_default()
}

/// Escape text for use in HTML element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// A single class probability, as exposed by the API
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassProbability {
    pub label: String,
    pub probability: f64,
}

/// Presentation of one prediction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultView {
    pub label: String,
    pub emoji: &'static str,
    pub confidence: Option<f64>,
    pub confidence_text: String,
    pub probabilities: Option<Vec<ClassProbability>>,
    pub word_count: usize,
    pub char_count: usize,
    pub latency_us: u64,
}

impl ResultView {
    pub fn from_prediction(prediction: &Prediction) -> Self {
        Self {
            label: prediction.label.clone(),
            emoji: emoji_for(&prediction.label),
            confidence: prediction.confidence,
            confidence_text: confidence_text(prediction.confidence),
            probabilities: prediction.probabilities.as_ref().map(|probabilities| {
                probabilities
                    .iter()
                    .map(|(label, probability)| ClassProbability {
                        label: label.clone(),
                        probability: *probability,
                    })
                    .collect()
            }),
            word_count: prediction.statistics.word_count,
            char_count: prediction.statistics.char_count,
            latency_us: prediction.latency_us,
        }
    }

    /// Emoji and label, e.g. "🔴 Hard"
    pub fn headline(&self) -> String {
        format!("{} {}", self.emoji, self.label)
    }

    /// CSS modifier for the result widget; unknown labels share one class
    fn css_class(&self) -> &'static str {
        match Difficulty::from_label(&self.label) {
            Some(Difficulty::Easy) => "easy",
            Some(Difficulty::Medium) => "medium",
            Some(Difficulty::Hard) => "hard",
            None => "unknown",
        }
    }

    /// Result widget followed by the text statistics block
    pub fn render_html(&self) -> String {
        let mut html = String::new();

        let _ = write!(
            html,
            r#"<div class="result-widget result-{class}">
  <p class="result-caption">Predicted Difficulty</p>
  <h2 class="result-label">{headline}</h2>"#,
            class = self.css_class(),
            headline = escape_html(&self.headline()),
        );
        if !self.confidence_text.is_empty() {
            let _ = write!(
                html,
                r#"
  <p class="result-confidence">{}</p>"#,
                escape_html(&self.confidence_text)
            );
        }
        html.push_str("\n</div>\n");

        let _ = write!(
            html,
            r#"<section class="stats">
  <h3>📊 Text Statistics</h3>
  <div class="metric"><span class="metric-label">Total Words</span><span class="metric-value">{}</span></div>
  <div class="metric"><span class="metric-label">Total Characters</span><span class="metric-value">{}</span></div>
</section>
"#,
            self.word_count, self.char_count
        );

        html
    }

    /// Plain text rendering for the terminal
    pub fn render_text(&self) -> String {
        let mut text = format!("Predicted Difficulty: {}\n", self.headline());
        if !self.confidence_text.is_empty() {
            text.push_str(&self.confidence_text);
            text.push('\n');
        }
        if let Some(probabilities) = &self.probabilities {
            for p in probabilities {
                let _ = writeln!(text, "  {:<10} {:>6.1}%", p.label, p.probability * 100.0);
            }
        }
        let _ = writeln!(text, "Total Words: {}", self.word_count);
        let _ = writeln!(text, "Total Characters: {}", self.char_count);
        text
    }
}

/// Warning banner for rejected input
pub fn render_warning(message: &str) -> String {
    format!(
        "<div class=\"warning\" role=\"alert\">{}</div>\n",
        escape_html(message)
    )
}

/// Error banner for a failed analysis
pub fn render_error(message: &str) -> String {
    format!(
        "<div class=\"error\" role=\"alert\">{}</div>\n",
        escape_html(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use qdiff_core::TextStatistics;

    fn prediction(label: &str, confidence: Option<f64>) -> Prediction {
        Prediction {
            label: label.to_string(),
            class_index: 0,
            confidence,
            probabilities: None,
            statistics: TextStatistics::from_text("what is 22"),
            cleaned_text: "what is 22".to_string(),
            latency_us: 120,
        }
    }

    #[test]
    fn test_emoji_for_known_and_unknown_labels() {
        assert_eq!(emoji_for("Easy"), "🟢");
        assert_eq!(emoji_for("Medium"), "🟠");
        assert_eq!(emoji_for("Hard"), "🔴");
        assert_eq!(emoji_for("Expert"), "⚪");
        assert_eq!(emoji_for(""), "⚪");
    }

    #[test]
    fn test_confidence_text() {
        assert_eq!(confidence_text(Some(87.3)), "Confidence Score: 87.3%");
        assert_eq!(confidence_text(Some(100.0)), "Confidence Score: 100.0%");
        assert_eq!(confidence_text(None), "");
    }

    #[test]
    fn test_hard_prediction_view() {
        let view = ResultView::from_prediction(&prediction("Hard", Some(87.3)));

        assert_eq!(view.headline(), "🔴 Hard");
        assert_eq!(view.confidence_text, "Confidence Score: 87.3%");

        let html = view.render_html();
        assert!(html.contains("🔴 Hard"));
        assert!(html.contains("Confidence Score: 87.3%"));
        assert!(html.contains("result-hard"));
        assert!(html.contains("Total Words"));
        assert!(html.contains("Total Characters"));
    }

    #[test]
    fn test_unknown_label_view() {
        let view = ResultView::from_prediction(&prediction("Expert", None));

        assert_eq!(view.headline(), "⚪ Expert");
        let html = view.render_html();
        assert!(html.contains("result-unknown"));
        assert!(!html.contains("result-confidence"));
    }

    #[test]
    fn test_label_is_escaped() {
        let view = ResultView::from_prediction(&prediction("<script>x</script>", None));
        let html = view.render_html();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn test_render_text() {
        let mut p = prediction("Easy", Some(64.0));
        p.probabilities = Some(vec![("Easy".into(), 0.64), ("Hard".into(), 0.36)]);
        let text = ResultView::from_prediction(&p).render_text();

        assert!(text.starts_with("Predicted Difficulty: 🟢 Easy\n"));
        assert!(text.contains("Confidence Score: 64.0%"));
        assert!(text.contains("Total Words: 3"));
        assert!(text.contains("Total Characters: 10"));
    }

    #[test]
    fn test_warning_banner() {
        let html = render_warning(EMPTY_QUESTION_WARNING);
        assert!(html.contains("⚠️ Please enter a question to analyze."));
    }
}
