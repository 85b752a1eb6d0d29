//! ATS format risk scoring over raw resume text

use crate::error::{AtsCheckerError, Result};
use aho_corasick::AhoCorasick;
use log::debug;
use serde::{Deserialize, Serialize};

const MAX_SCORE: u32 = 100;

/// Penalize the score when `pattern` occurs more than `threshold` times
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatRule {
    pub name: String,
    pub pattern: String,
    pub threshold: usize,
    pub penalty: u8,
}

impl FormatRule {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>, threshold: usize, penalty: u8) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            threshold,
            penalty,
        }
    }

    /// Table borders, dense bullet lists and tab-aligned columns
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("pipe", "|", 10, 20),
            Self::new("bullet", "•", 20, 10),
            Self::new("tab", "\t", 20, 10),
        ]
    }
}

/// Outcome of one rule against one text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleFinding {
    pub rule: String,
    pub count: usize,
    pub triggered: bool,
    pub penalty: u8,
}

pub struct FormatRiskScorer {
    rules: Vec<FormatRule>,
    matcher: Option<AhoCorasick>,
}

impl Default for FormatRiskScorer {
    fn default() -> Self {
        Self::new(FormatRule::defaults()).expect("Invalid default format rules")
    }
}

impl FormatRiskScorer {
    pub fn new(rules: Vec<FormatRule>) -> Result<Self> {
        if let Some(rule) = rules.iter().find(|r| r.pattern.is_empty()) {
            return Err(AtsCheckerError::Configuration(format!(
                "Format rule '{}' has an empty pattern",
                rule.name
            )));
        }

        let matcher = if rules.is_empty() {
            None
        } else {
            let patterns: Vec<&str> = rules.iter().map(|r| r.pattern.as_str()).collect();
            Some(AhoCorasick::new(&patterns).map_err(|e| {
                AtsCheckerError::Configuration(format!("Failed to build format matcher: {}", e))
            })?)
        };

        Ok(Self { rules, matcher })
    }

    /// Occurrences of each rule's pattern, in rule order.
    ///
    /// Patterns are counted independently of each other in one pass.
    pub fn pattern_counts(&self, raw_text: &str) -> Vec<usize> {
        let mut counts = vec![0; self.rules.len()];

        if let Some(matcher) = &self.matcher {
            for mat in matcher.find_overlapping_iter(raw_text) {
                counts[mat.pattern().as_usize()] += 1;
            }
        }

        counts
    }

    pub fn assess(&self, raw_text: &str) -> Vec<RuleFinding> {
        self.rules
            .iter()
            .zip(self.pattern_counts(raw_text))
            .map(|(rule, count)| RuleFinding {
                rule: rule.name.clone(),
                count,
                triggered: count > rule.threshold,
                penalty: rule.penalty,
            })
            .collect()
    }

    /// Score out of 100; never negative.
    ///
    /// Takes the raw extracted text, since normalization collapses the
    /// tabs and whitespace these rules look at.
    pub fn score(&self, raw_text: &str) -> u8 {
        let findings = self.assess(raw_text);

        let penalty: u32 = findings
            .iter()
            .filter(|finding| finding.triggered)
            .inspect(|finding| {
                debug!(
                    "Format rule '{}' triggered ({} occurrences): -{}",
                    finding.rule, finding.count, finding.penalty
                )
            })
            .map(|finding| finding.penalty as u32)
            .sum();

        MAX_SCORE.saturating_sub(penalty) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_scores_full() {
        let scorer = FormatRiskScorer::default();
        assert_eq!(scorer.score("Experienced Python Developer. Built APIs using Flask."), 100);
        assert_eq!(scorer.score(""), 100);
    }

    #[test]
    fn test_pipe_penalty() {
        let scorer = FormatRiskScorer::default();
        assert_eq!(scorer.score(&"a | ".repeat(15)), 80);
        // At the threshold nothing fires.
        assert_eq!(scorer.score(&"|".repeat(10)), 100);
        assert_eq!(scorer.score(&"|".repeat(11)), 80);
    }

    #[test]
    fn test_all_rules_fire() {
        let scorer = FormatRiskScorer::default();
        let text = format!("{}{}{}", "|".repeat(11), "•".repeat(21), "\t".repeat(21));
        assert_eq!(scorer.score(&text), 60);

        let findings = scorer.assess(&text);
        assert_eq!(findings.len(), 3);
        assert!(findings.iter().all(|f| f.triggered));
        assert_eq!(findings[1].count, 21);
    }

    #[test]
    fn test_more_special_characters_never_raise_score() {
        let scorer = FormatRiskScorer::default();
        let base = "Skills: Rust, Go";

        for (pattern, threshold) in [("|", 10), ("•", 20), ("\t", 20)] {
            let mut previous = scorer.score(base);
            let mut text = base.to_string();

            for added in 1..=threshold * 3 {
                text.push_str(pattern);
                text.push(' ');
                let score = scorer.score(&text);
                assert!(score <= previous, "{:?} x{} raised the score", pattern, added);
                previous = score;
            }

            // Well past the threshold, only this rule has fired.
            let expected = if pattern == "|" { 80 } else { 90 };
            assert_eq!(previous, expected, "{:?}", pattern);
        }

        let mixed = format!("{}{}{}", "| ".repeat(11), "• ".repeat(21), "\t".repeat(21));
        let more = format!("{}{}", mixed, "|•\t".repeat(50));
        assert!(scorer.score(&more) <= scorer.score(&mixed));
    }

    #[test]
    fn test_bullet_counts_characters_not_bytes() {
        let scorer = FormatRiskScorer::default();
        // Each bullet is three bytes in UTF-8.
        assert_eq!(scorer.pattern_counts(&"•".repeat(20))[1], 20);
        assert_eq!(scorer.score(&"• item\n".repeat(20)), 100);
        assert_eq!(scorer.score(&"• item\n".repeat(21)), 90);
    }

    #[test]
    fn test_score_is_floored_at_zero() {
        let rules = vec![
            FormatRule::new("pipe", "|", 0, 80),
            FormatRule::new("hash", "#", 0, 80),
        ];
        let scorer = FormatRiskScorer::new(rules).unwrap();
        assert_eq!(scorer.score("| #"), 0);
        assert_eq!(scorer.score("plain"), 100);
    }

    #[test]
    fn test_empty_pattern_is_rejected() {
        let result = FormatRiskScorer::new(vec![FormatRule::new("empty", "", 1, 10)]);
        assert!(matches!(result, Err(AtsCheckerError::Configuration(_))));
    }

    #[test]
    fn test_no_rules() {
        let scorer = FormatRiskScorer::new(Vec::new()).unwrap();
        assert_eq!(scorer.score("| | | •"), 100);
        assert!(scorer.pattern_counts("|").is_empty());
    }
}
