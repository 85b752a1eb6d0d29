//! Declared document kind detection

use serde::{Deserialize, Serialize};
use std::fmt;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Kind declared by whoever supplied the document bytes.
///
/// Anything that is neither PDF nor DOCX is kept as `Unrecognized` with the
/// original declaration, so diagnostics can say what was actually supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Unrecognized(String),
}

impl DocumentKind {
    /// Map a MIME type. Parameters after `;` and letter case are ignored.
    pub fn from_mime(mime: &str) -> Self {
        let essence = mime
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase();

        match essence.as_str() {
            PDF_MIME => DocumentKind::Pdf,
            DOCX_MIME => DocumentKind::Docx,
            _ => DocumentKind::Unrecognized(mime.to_string()),
        }
    }

    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => DocumentKind::Pdf,
            "docx" => DocumentKind::Docx,
            _ => DocumentKind::Unrecognized(ext.to_string()),
        }
    }

    /// Parse a user-supplied kind: either a short name (`pdf`, `docx`) or a MIME type.
    pub fn parse(value: &str) -> Self {
        if value.contains('/') {
            Self::from_mime(value)
        } else {
            Self::from_extension(value.trim_start_matches('.'))
        }
    }

    pub fn mime_type(&self) -> Option<&'static str> {
        match self {
            DocumentKind::Pdf => Some(PDF_MIME),
            DocumentKind::Docx => Some(DOCX_MIME),
            DocumentKind::Unrecognized(_) => None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, DocumentKind::Unrecognized(_))
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Pdf => write!(f, "PDF"),
            DocumentKind::Docx => write!(f, "DOCX"),
            DocumentKind::Unrecognized(declared) => write!(f, "unrecognized ({})", declared),
        }
    }
}
