//! Displayable report built from one analysis result

use crate::processing::analyzer::AnalysisResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const NO_KEYWORDS_MESSAGE: &str = "No keywords matched.";

pub const KEYWORD_TIP: &str = "Tip: Try to use the exact keywords from the job description in your resume's experience and skills sections.";

/// Report with display strings alongside the raw result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub summary: ScoreSummary,
    pub result: AnalysisResult,
    pub metadata: ReportMetadata,
}

/// Each score rendered the way it is shown to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    /// e.g. `73.42%`
    pub match_score: String,
    /// e.g. `4/6 keywords`
    pub keyword_match: String,
    /// Comma-joined, or the no-match message
    pub matched_keywords: String,
    /// e.g. `80/100`
    pub format_score: String,

    pub similarity_band: ScoreBand,
    pub keyword_band: ScoreBand,
    pub format_band: ScoreBand,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub checker_version: String,
    pub resume_file: Option<String>,
    pub job_source: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    Strong,   // >= 70
    Moderate, // 40-69
    Weak,     // < 40
}

impl ScoreBand {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 70.0 {
            ScoreBand::Strong
        } else if percentage >= 40.0 {
            ScoreBand::Moderate
        } else {
            ScoreBand::Weak
        }
    }
}

impl AnalysisReport {
    pub fn from_result(
        result: AnalysisResult,
        resume_file: Option<String>,
        job_source: Option<String>,
    ) -> Self {
        let summary = Self::create_summary(&result);
        let metadata = ReportMetadata {
            generated_at: Utc::now(),
            checker_version: env!("CARGO_PKG_VERSION").to_string(),
            resume_file,
            job_source,
        };

        Self {
            summary,
            result,
            metadata,
        }
    }

    fn create_summary(result: &AnalysisResult) -> ScoreSummary {
        let similarity_percentage = result.similarity * 100.0;

        // 0/0 stays a pair of counts; the band treats it as no coverage.
        let keyword_percentage = if result.total_jd_keywords == 0 {
            0.0
        } else {
            result.matched_count as f64 / result.total_jd_keywords as f64 * 100.0
        };

        let matched_keywords = if result.matched_keywords.is_empty() {
            NO_KEYWORDS_MESSAGE.to_string()
        } else {
            result
                .matched_keywords
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        };

        ScoreSummary {
            match_score: format!("{:.2}%", similarity_percentage),
            keyword_match: format!(
                "{}/{} keywords",
                result.matched_count, result.total_jd_keywords
            ),
            matched_keywords,
            format_score: format!("{}/100", result.format_score),
            similarity_band: ScoreBand::from_percentage(similarity_percentage),
            keyword_band: ScoreBand::from_percentage(keyword_percentage),
            format_band: ScoreBand::from_percentage(result.format_score as f64),
        }
    }
}
