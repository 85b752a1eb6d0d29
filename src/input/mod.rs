//! Input processing module
//! Handles document kind detection, text extraction, and loading inputs from disk

pub mod document_kind;
pub mod text_extractor;
pub mod manager;

pub use document_kind::DocumentKind;
