//! Error handling for the ATS checker

use crate::input::document_kind::DocumentKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtsCheckerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A PDF or DOCX payload could not be parsed. Analysis aborts.
    #[error("{kind} extraction error: {message}")]
    Extraction { kind: DocumentKind, message: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

impl AtsCheckerError {
    pub fn extraction(kind: DocumentKind, message: impl Into<String>) -> Self {
        AtsCheckerError::Extraction {
            kind,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AtsCheckerError>;

/// Convert zip container errors raised while opening DOCX payloads
impl From<zip::result::ZipError> for AtsCheckerError {
    fn from(err: zip::result::ZipError) -> Self {
        AtsCheckerError::extraction(DocumentKind::Docx, err.to_string())
    }
}
