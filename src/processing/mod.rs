//! Text processing and scoring

pub mod document;
pub mod stopwords;
pub mod text_processor;
pub mod similarity;
pub mod lexicon;
pub mod lemmatizer;
pub mod annotator;
pub mod ats_matcher;
pub mod format_scorer;
pub mod analyzer;
