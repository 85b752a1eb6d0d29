//! Keyword matching between a resume and a job description

use crate::processing::annotator::{AnnotatedToken, Annotator};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Overlap between job-description keywords and resume lemmas
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub matched_keywords: BTreeSet<String>,
    pub matched_count: usize,
    pub total_jd_keywords: usize,
}

/// Lemma-based keyword matcher
pub struct KeywordMatcher {
    annotator: Arc<dyn Annotator>,
}

impl KeywordMatcher {
    pub fn new(annotator: Arc<dyn Annotator>) -> Self {
        Self { annotator }
    }

    /// Lemmas of nouns, proper nouns and verbs in the job description
    pub fn job_keywords(&self, job_text: &str) -> BTreeSet<String> {
        keyword_lemmas(&self.annotator.annotate(job_text))
    }

    /// Every lemma in the resume, whatever its part of speech
    pub fn resume_lemmas(&self, resume_text: &str) -> BTreeSet<String> {
        self.annotator
            .annotate(resume_text)
            .into_iter()
            .map(|token| token.lemma)
            .collect()
    }

    /// Both inputs are expected to be normalized already.
    pub fn match_keywords(&self, resume_text: &str, job_text: &str) -> KeywordMatch {
        let jd_keywords = self.job_keywords(job_text);
        let resume_lemmas = self.resume_lemmas(resume_text);

        let matched_keywords: BTreeSet<String> = jd_keywords
            .intersection(&resume_lemmas)
            .cloned()
            .collect();

        debug!(
            "Matched {} of {} job keywords against {} resume lemmas",
            matched_keywords.len(),
            jd_keywords.len(),
            resume_lemmas.len()
        );

        KeywordMatch {
            matched_count: matched_keywords.len(),
            total_jd_keywords: jd_keywords.len(),
            matched_keywords,
        }
    }
}

fn keyword_lemmas(tokens: &[AnnotatedToken]) -> BTreeSet<String> {
    tokens
        .iter()
        .filter(|token| token.pos.is_keyword_class())
        .map(|token| token.lemma.clone())
        .collect()
}
