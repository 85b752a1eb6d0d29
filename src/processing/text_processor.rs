//! Text normalization

use crate::processing::stopwords::StopwordSet;
use log::debug;
use regex::Regex;
use std::sync::Arc;

/// Lower-cases, collapses whitespace, and drops stopwords.
///
/// Output is a pure function of the input text and the stopword set.
pub struct TextNormalizer {
    stopwords: Arc<StopwordSet>,
    whitespace_regex: Regex,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(Arc::new(StopwordSet::english()))
    }
}

impl TextNormalizer {
    pub fn new(stopwords: Arc<StopwordSet>) -> Self {
        let whitespace_regex = Regex::new(r"\s+").expect("Invalid whitespace regex");

        Self {
            stopwords,
            whitespace_regex,
        }
    }

    pub fn normalize(&self, text: &str) -> String {
        let collapsed = self.whitespace_regex.replace_all(text, " ");
        let lowered = collapsed.to_lowercase();

        let kept: Vec<&str> = lowered
            .split(' ')
            .filter(|token| !token.is_empty())
            .filter(|token| !self.stopwords.contains(token))
            .collect();

        debug!(
            "Normalized {} chars into {} tokens",
            text.chars().count(),
            kept.len()
        );

        kept.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_lowercases_and_filters() {
        let normalizer = TextNormalizer::default();
        let text = "Looking for a  Python\tdeveloper\n\nwith Flask and API experience.";

        assert_eq!(
            normalizer.normalize(text),
            "looking python developer flask api experience."
        );
    }

    #[test]
    fn test_punctuation_is_kept() {
        let normalizer = TextNormalizer::default();
        assert_eq!(
            normalizer.normalize("Built APIs | Flask • Docker"),
            "built apis | flask • docker"
        );
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        let normalizer = TextNormalizer::default();
        assert_eq!(normalizer.normalize(""), "");
        assert_eq!(normalizer.normalize(" \n\t "), "");
        assert_eq!(normalizer.normalize("The and of"), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let normalizer = TextNormalizer::default();
        let once = normalizer.normalize("  Senior RUST Engineer with  experience in the Cloud ");
        assert_eq!(normalizer.normalize(&once), once);
    }

    #[test]
    fn test_custom_stopwords() {
        let normalizer = TextNormalizer::new(Arc::new(StopwordSet::from_words(["resume"])));
        assert_eq!(normalizer.normalize("My Resume"), "my");
    }
}
