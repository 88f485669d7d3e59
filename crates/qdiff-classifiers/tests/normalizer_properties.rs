//! Property tests for question normalization

use proptest::prelude::*;
use qdiff_classifiers::clean_text;
use qdiff_core::TextStatistics;

fn tag() -> impl Strategy<Value = String> {
    ("[a-zA-Z]{1,8}", "( [a-z]{1,6}=\"[a-z0-9]{0,6}\")?", any::<bool>()).prop_map(
        |(name, attr, closing)| {
            if closing {
                format!("</{name}>")
            } else {
                format!("<{name}{attr}>")
            }
        },
    )
}

fn question_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,.?!;:'()+\\-*/=\t\néüß_]{0,80}"
}

proptest! {
    #[test]
    fn removes_every_tag(
        before in question_text(),
        tag in tag(),
        after in question_text(),
    ) {
        let cleaned = clean_text(&format!("{before}{tag}{after}"));
        prop_assert!(!cleaned.contains(&tag));
        prop_assert!(!cleaned.contains('<'));
        prop_assert!(!cleaned.contains('>'));
    }

    #[test]
    fn is_idempotent(text in question_text()) {
        let once = clean_text(&text);
        prop_assert_eq!(clean_text(&once), once);
    }

    #[test]
    fn is_idempotent_with_markup(text in question_text(), tag in tag()) {
        let once = clean_text(&format!("{tag}{text}{tag}"));
        prop_assert_eq!(clean_text(&once), once);
    }

    #[test]
    fn output_is_lowercase_words_and_whitespace(text in question_text()) {
        let cleaned = clean_text(&text);
        prop_assert!(cleaned
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c.is_whitespace()));
        prop_assert_eq!(cleaned.to_lowercase(), cleaned.clone());
    }

    #[test]
    fn never_adds_words(text in question_text()) {
        let raw_words = text.split_whitespace().count();
        let stats = TextStatistics::from_text(&clean_text(&text));
        prop_assert!(stats.word_count <= raw_words);
    }
}
