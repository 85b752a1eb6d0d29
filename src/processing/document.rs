//! Document structures

use crate::input::document_kind::DocumentKind;

/// An uploaded resume: opaque bytes plus the kind declared by the uploader.
///
/// Lives only for the duration of one analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub bytes: Vec<u8>,
    pub kind: DocumentKind,
    pub source: Option<String>,
}

impl Document {
    pub fn new(bytes: Vec<u8>, kind: DocumentKind) -> Self {
        Self {
            bytes,
            kind,
            source: None,
        }
    }

    /// Build a document from bytes and a MIME type
    pub fn from_mime(bytes: Vec<u8>, mime: &str) -> Self {
        Self::new(bytes, DocumentKind::from_mime(mime))
    }

    /// Attach the origin (file path, upload name) for diagnostics
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn describe(&self) -> String {
        match &self.source {
            Some(source) => format!("{} document '{}'", self.kind, source),
            None => format!("{} document", self.kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_creation() {
        let doc = Document::from_mime(vec![1, 2, 3], "application/pdf").with_source("cv.pdf");

        assert_eq!(doc.kind, DocumentKind::Pdf);
        assert_eq!(doc.len(), 3);
        assert!(!doc.is_empty());
        assert_eq!(doc.describe(), "PDF document 'cv.pdf'");
    }
}
