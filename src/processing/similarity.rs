//! TF-IDF cosine similarity over a two-document corpus
//!
//! The corpus is exactly the documents being compared, so IDF weights are
//! relative to that pair. Scores from different pairs are not comparable.

use regex::Regex;
use std::collections::BTreeMap;

/// Sparse TF-IDF vectorizer with smoothed IDF and L2-normalized rows
pub struct TfIdfVectorizer {
    token_regex: Regex,
}

/// Fitted vocabulary plus one weight row per input document
#[derive(Debug, Clone)]
pub struct TfIdfMatrix {
    pub vocabulary: Vec<String>,
    pub idf: Vec<f64>,
    pub rows: Vec<Vec<f64>>,
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TfIdfVectorizer {
    pub fn new() -> Self {
        // Tokens are runs of two or more word characters.
        let token_regex = Regex::new(r"\b\w\w+\b").expect("Invalid token regex");
        Self { token_regex }
    }

    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.token_regex.find_iter(text).map(|m| m.as_str()).collect()
    }

    pub fn fit_transform(&self, documents: &[&str]) -> TfIdfMatrix {
        let counts: Vec<BTreeMap<&str, usize>> = documents
            .iter()
            .map(|doc| {
                let mut tf = BTreeMap::new();
                for token in self.tokenize(doc) {
                    *tf.entry(token).or_insert(0) += 1;
                }
                tf
            })
            .collect();

        let mut doc_freq: BTreeMap<&str, usize> = BTreeMap::new();
        for tf in &counts {
            for &term in tf.keys() {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let n_docs = documents.len() as f64;
        let vocabulary: Vec<String> = doc_freq.keys().map(|t| t.to_string()).collect();
        let idf: Vec<f64> = doc_freq
            .values()
            .map(|&df| ((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let rows = counts
            .iter()
            .map(|tf| {
                let mut row: Vec<f64> = doc_freq
                    .keys()
                    .zip(&idf)
                    .map(|(term, weight)| tf.get(term).copied().unwrap_or(0) as f64 * weight)
                    .collect();
                l2_normalize(&mut row);
                row
            })
            .collect();

        TfIdfMatrix {
            vocabulary,
            idf,
            rows,
        }
    }
}

fn l2_normalize(row: &mut [f64]) {
    let norm = row.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm > 0.0 {
        row.iter_mut().for_each(|v| *v /= norm);
    }
}

/// Cosine similarity; zero vectors compare as 0
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|v| v * v).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|v| v * v).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Lexical closeness of a normalized resume and job description
pub struct SimilarityScorer {
    vectorizer: TfIdfVectorizer,
}

impl Default for SimilarityScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SimilarityScorer {
    pub fn new() -> Self {
        Self {
            vectorizer: TfIdfVectorizer::new(),
        }
    }

    /// Similarity in [0, 1]. An empty side, or an empty shared vocabulary, scores 0.
    pub fn score(&self, resume: &str, job: &str) -> f64 {
        let matrix = self.vectorizer.fit_transform(&[resume, job]);
        if matrix.vocabulary.is_empty() {
            return 0.0;
        }
        cosine_similarity(&matrix.rows[0], &matrix.rows[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_text_scores_one() {
        let scorer = SimilarityScorer::new();
        let text = "senior rust engineer distributed systems";
        assert!((scorer.score(text, text) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_text_scores_zero() {
        let scorer = SimilarityScorer::new();
        assert_eq!(scorer.score("rust tokio", "watercolor painting"), 0.0);
    }

    #[test]
    fn test_empty_side_scores_zero() {
        let scorer = SimilarityScorer::new();
        assert_eq!(scorer.score("", "python developer"), 0.0);
        assert_eq!(scorer.score("python developer", ""), 0.0);
        assert_eq!(scorer.score("", ""), 0.0);
        // Single-character tokens never enter the vocabulary.
        assert_eq!(scorer.score("a b c", "x y z"), 0.0);
    }

    #[test]
    fn test_smoothed_idf_weights() {
        let vectorizer = TfIdfVectorizer::new();
        let matrix = vectorizer.fit_transform(&["rust python", "rust"]);

        assert_eq!(matrix.vocabulary, vec!["python", "rust"]);
        assert!((matrix.idf[1] - 1.0).abs() < 1e-12);
        assert!((matrix.idf[0] - ((3.0f64 / 2.0).ln() + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_known_value() {
        // 3 shared terms; resume has 4 unique terms, job has 3.
        let scorer = SimilarityScorer::new();
        let resume = "experienced python developer. built apis using flask.";
        let job = "looking python developer flask api experience.";

        let unique = (1.5f64).ln() + 1.0;
        let expected = 3.0
            / ((3.0 + 4.0 * unique * unique).sqrt() * (3.0 + 3.0 * unique * unique).sqrt());

        let score = scorer.score(resume, job);
        assert!((score - expected).abs() < 1e-9);
        assert!(score > 0.3);
    }

    #[test]
    fn test_score_is_symmetric_and_bounded() {
        let scorer = SimilarityScorer::new();
        let a = "rust rust async tokio services";
        let b = "async python services services";
        let ab = scorer.score(a, b);
        let ba = scorer.score(b, a);

        assert!((ab - ba).abs() < 1e-12);
        assert!((0.0..=1.0).contains(&ab));
    }
}
