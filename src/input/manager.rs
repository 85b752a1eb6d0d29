//! Input manager for loading resumes and job descriptions from disk

use crate::error::{AtsCheckerError, Result};
use crate::input::document_kind::DocumentKind;
use crate::processing::document::Document;
use log::info;
use std::path::Path;
use tokio::fs;

pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    /// Read a resume file into a `Document`.
    ///
    /// The declared kind comes from `kind_override` when given, otherwise from
    /// the file extension. Files without an extension are `Unrecognized`.
    pub async fn load_document(&self, path: &Path, kind_override: Option<&str>) -> Result<Document> {
        if !path.exists() {
            return Err(AtsCheckerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let kind = match kind_override {
            Some(kind) => DocumentKind::parse(kind),
            None => self.detect_kind(path),
        };

        info!("Reading {} as {}", path.display(), kind);
        let bytes = fs::read(path).await?;

        if bytes.is_empty() {
            return Err(AtsCheckerError::InvalidInput(format!(
                "Resume file is empty: {}",
                path.display()
            )));
        }

        Ok(Document::new(bytes, kind).with_source(path.display().to_string()))
    }

    /// Read a plain-text job description
    pub async fn read_job_description(&self, path: &Path) -> Result<String> {
        info!("Reading job description: {}", path.display());
        let text = fs::read_to_string(path).await.map_err(|e| {
            AtsCheckerError::InvalidInput(format!(
                "Failed to read job description '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::require_job_text(text)
    }

    /// Reject empty or whitespace-only job descriptions
    pub fn require_job_text(text: String) -> Result<String> {
        if text.trim().is_empty() {
            return Err(AtsCheckerError::InvalidInput(
                "Job description is empty".to_string(),
            ));
        }
        Ok(text)
    }

    fn detect_kind(&self, path: &Path) -> DocumentKind {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) => DocumentKind::from_extension(ext),
            None => DocumentKind::Unrecognized(String::new()),
        }
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
