//! Analysis engine: extraction, normalization and the three scores

use crate::config::{AnalysisConfig, Config};
use crate::error::Result;
use crate::input::text_extractor::ExtractorRegistry;
use crate::processing::annotator::{Annotator, RuleBasedAnnotator};
use crate::processing::ats_matcher::KeywordMatcher;
use crate::processing::document::Document;
use crate::processing::format_scorer::FormatRiskScorer;
use crate::processing::similarity::SimilarityScorer;
use crate::processing::stopwords::StopwordSet;
use crate::processing::text_processor::TextNormalizer;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Instant;

/// Process-wide language resources, loaded once and never mutated
#[derive(Clone)]
pub struct AnalysisContext {
    pub stopwords: Arc<StopwordSet>,
    pub annotator: Arc<dyn Annotator>,
}

impl AnalysisContext {
    pub fn new(stopwords: Arc<StopwordSet>, annotator: Arc<dyn Annotator>) -> Self {
        Self {
            stopwords,
            annotator,
        }
    }

    /// Built-in English stopwords with the rule-based annotator
    pub fn english() -> Self {
        Self::new(
            Arc::new(StopwordSet::english()),
            Arc::new(RuleBasedAnnotator::new()),
        )
    }

    pub fn from_config(config: &AnalysisConfig) -> Result<Self> {
        let stopwords = match &config.stopwords_file {
            Some(path) => {
                info!("Loading stopwords from {}", path.display());
                StopwordSet::from_file(path)?
            }
            None => StopwordSet::english(),
        };
        debug!("Using {} stopwords", stopwords.len());

        Ok(Self::new(
            Arc::new(stopwords),
            Arc::new(RuleBasedAnnotator::new()),
        ))
    }
}

/// Scores for one resume against one job description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// TF-IDF cosine similarity in [0, 1]
    pub similarity: f64,
    pub matched_keywords: BTreeSet<String>,
    pub matched_count: usize,
    pub total_jd_keywords: usize,
    /// 0 to 100
    pub format_score: u8,
}

pub struct AnalysisEngine {
    extractors: ExtractorRegistry,
    normalizer: TextNormalizer,
    similarity: SimilarityScorer,
    keyword_matcher: KeywordMatcher,
    format_scorer: FormatRiskScorer,
}

impl AnalysisEngine {
    /// Engine with the PDF/DOCX extractors and the default format rules
    pub fn new(context: AnalysisContext) -> Self {
        Self::from_parts(context, ExtractorRegistry::new(), FormatRiskScorer::default())
    }

    pub fn with_config(config: &Config) -> Result<Self> {
        let context = AnalysisContext::from_config(&config.analysis)?;
        let format_scorer = FormatRiskScorer::new(config.analysis.format_rules.clone())?;
        Ok(Self::from_parts(context, ExtractorRegistry::new(), format_scorer))
    }

    pub fn from_parts(
        context: AnalysisContext,
        extractors: ExtractorRegistry,
        format_scorer: FormatRiskScorer,
    ) -> Self {
        Self {
            extractors,
            normalizer: TextNormalizer::new(context.stopwords),
            similarity: SimilarityScorer::new(),
            keyword_matcher: KeywordMatcher::new(context.annotator),
            format_scorer,
        }
    }

    /// Run the whole pipeline on a document.
    ///
    /// Callers make sure the document and job text are non-empty. An
    /// unrecognized document kind analyzes as an empty resume.
    pub fn analyze(&self, document: &Document, job_text: &str) -> Result<AnalysisResult> {
        let start_time = Instant::now();

        let resume_text = self.extractors.extract(document)?;
        let result = self.analyze_text(&resume_text, job_text);

        info!(
            "Analysis of {} completed in {}ms",
            document.describe(),
            start_time.elapsed().as_millis()
        );
        Ok(result)
    }

    /// Score already-extracted resume text against a job description
    pub fn analyze_text(&self, resume_text: &str, job_text: &str) -> AnalysisResult {
        let resume_clean = self.normalizer.normalize(resume_text);
        let jd_clean = self.normalizer.normalize(job_text);

        let similarity = self.similarity.score(&resume_clean, &jd_clean);
        let keywords = self.keyword_matcher.match_keywords(&resume_clean, &jd_clean);
        // Raw text: normalization removes the characters these rules count.
        let format_score = self.format_scorer.score(resume_text);

        debug!(
            "similarity={:.4} keywords={}/{} format={}",
            similarity, keywords.matched_count, keywords.total_jd_keywords, format_score
        );

        AnalysisResult {
            similarity,
            matched_keywords: keywords.matched_keywords,
            matched_count: keywords.matched_count,
            total_jd_keywords: keywords.total_jd_keywords,
            format_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::document_kind::DocumentKind;

    const RESUME: &str = "Experienced Python Developer. Built APIs using Flask.";
    const JOB: &str = "Looking for a Python developer with Flask and API experience.";

    #[test]
    fn test_analyze_text_end_to_end() {
        let engine = AnalysisEngine::new(AnalysisContext::english());
        let result = engine.analyze_text(RESUME, JOB);

        assert!(result.similarity > 0.3);
        assert!(result.similarity <= 1.0);
        for keyword in ["python", "developer", "flask", "api"] {
            assert!(result.matched_keywords.contains(keyword), "missing {}", keyword);
        }
        assert_eq!(result.matched_count, result.matched_keywords.len());
        assert_eq!(result.format_score, 100);
    }

    #[test]
    fn test_unrecognized_document_degrades_to_empty_resume() {
        let engine = AnalysisEngine::new(AnalysisContext::english());
        let document = Document::new(b"plain text resume".to_vec(), DocumentKind::from_mime("text/plain"));

        let result = engine.analyze(&document, JOB).unwrap();
        assert_eq!(result.similarity, 0.0);
        assert_eq!(result.matched_count, 0);
        assert!(result.matched_keywords.is_empty());
        assert!(result.total_jd_keywords > 0);
        assert_eq!(result.format_score, 100);
    }

    #[test]
    fn test_corrupt_document_is_an_error() {
        let engine = AnalysisEngine::new(AnalysisContext::english());
        let document = Document::new(b"not a pdf".to_vec(), DocumentKind::Pdf);
        assert!(engine.analyze(&document, JOB).is_err());
    }

    #[test]
    fn test_format_score_uses_raw_text() {
        let engine = AnalysisEngine::new(AnalysisContext::english());
        let resume = format!("Skills {}", "\t".repeat(25));
        assert_eq!(engine.analyze_text(&resume, JOB).format_score, 90);
    }

    #[test]
    fn test_custom_stopwords_change_similarity() {
        let context = AnalysisContext::new(
            Arc::new(StopwordSet::from_words(["python"])),
            Arc::new(RuleBasedAnnotator::new()),
        );
        let engine = AnalysisEngine::new(context);
        let result = engine.analyze_text("python", "python");
        assert_eq!(result.similarity, 0.0);
        assert_eq!(result.total_jd_keywords, 0);
    }

    #[test]
    fn test_with_config_uses_format_rules() {
        let mut config = Config::default();
        config.analysis.format_rules =
            vec![crate::processing::format_scorer::FormatRule::new("comma", ",", 1, 50)];
        let engine = AnalysisEngine::with_config(&config).unwrap();

        assert_eq!(engine.analyze_text("a, b, c", "b").format_score, 50);
    }
}
