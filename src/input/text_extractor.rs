//! Text extraction from uploaded resume formats

use crate::error::{AtsCheckerError, Result};
use crate::input::document_kind::DocumentKind;
use crate::processing::document::Document;
use log::{debug, info, warn};
use regex::Regex;
use std::io::{Cursor, Read};
use std::panic::{self, AssertUnwindSafe};

const DOCX_BODY_PART: &str = "word/document.xml";

pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        // pdf-extract panics on some malformed inputs instead of returning an error.
        let pages = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(bytes)
        }))
        .map_err(|_| AtsCheckerError::extraction(DocumentKind::Pdf, "PDF parser aborted on malformed input"))?
        .map_err(|e| AtsCheckerError::extraction(DocumentKind::Pdf, format!("Failed to extract text from PDF: {}", e)))?;

        debug!("Extracted {} PDF pages", pages.len());

        // Pages are joined with no separator; a page without text adds an empty segment.
        Ok(pages.concat())
    }
}

pub struct DocxExtractor {
    tag_regex: Regex,
}

impl Default for DocxExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocxExtractor {
    pub fn new() -> Self {
        Self {
            tag_regex: Regex::new(r"<[^>]*>").expect("Invalid XML tag regex"),
        }
    }

    /// Collect body-level paragraphs from a WordprocessingML document part.
    ///
    /// Only direct children of `w:body` count. Paragraphs inside tables,
    /// text boxes, content controls (`w:sdt`) or `w:customXml` blocks are
    /// skipped. Page and column breaks contribute nothing.
    pub fn paragraphs_from_xml(&self, xml: &str) -> Vec<String> {
        let mut paragraphs = Vec::new();
        let mut current = String::new();
        let mut table_depth = 0usize;
        // One entry per open w:sdt/w:customXml; true when it wraps whole paragraphs.
        let mut wrappers: Vec<bool> = Vec::new();
        let mut paragraph_depth = 0usize;
        let mut run_depth = 0usize;
        let mut in_text = false;
        let mut last_end = 0;

        for tag_match in self.tag_regex.find_iter(xml) {
            let top_level = table_depth == 0 && !wrappers.contains(&true);
            let collecting = top_level && paragraph_depth == 1;

            if in_text && collecting && run_depth > 0 {
                current.push_str(&decode_entities(&xml[last_end..tag_match.start()]));
            }
            last_end = tag_match.end();

            let tag = XmlTag::parse(tag_match.as_str());
            match (tag.name, tag.closing, tag.self_closing) {
                ("w:tbl", false, false) => table_depth += 1,
                ("w:tbl", true, _) => table_depth = table_depth.saturating_sub(1),
                ("w:sdt" | "w:customXml", false, false) => wrappers.push(paragraph_depth == 0),
                ("w:sdt" | "w:customXml", true, _) => {
                    wrappers.pop();
                }
                ("w:p", false, false) => paragraph_depth += 1,
                ("w:p", false, true) => {
                    if top_level && paragraph_depth == 0 {
                        paragraphs.push(String::new());
                    }
                }
                ("w:p", true, _) => {
                    if collecting {
                        paragraphs.push(std::mem::take(&mut current));
                    }
                    paragraph_depth = paragraph_depth.saturating_sub(1);
                }
                ("w:r", false, false) => run_depth += 1,
                ("w:r", true, _) => run_depth = run_depth.saturating_sub(1),
                ("w:t", false, false) => in_text = true,
                ("w:t", true, _) => in_text = false,
                ("w:tab", false, _) if collecting && run_depth > 0 => current.push('\t'),
                ("w:br", false, _) if collecting && run_depth > 0 => {
                    if matches!(tag.attribute("w:type"), None | Some("textWrapping")) {
                        current.push('\n');
                    }
                }
                ("w:cr", false, _) if collecting && run_depth > 0 => current.push('\n'),
                _ => {}
            }
        }

        paragraphs
    }
}

impl TextExtractor for DocxExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;

        let mut xml = String::new();
        archive
            .by_name(DOCX_BODY_PART)?
            .read_to_string(&mut xml)
            .map_err(|e| {
                AtsCheckerError::extraction(
                    DocumentKind::Docx,
                    format!("Failed to read {}: {}", DOCX_BODY_PART, e),
                )
            })?;

        let paragraphs = self.paragraphs_from_xml(&xml);
        debug!("Extracted {} DOCX paragraphs", paragraphs.len());

        Ok(paragraphs.join("\n"))
    }
}

/// Routes a document to the extractor registered for its kind
pub struct ExtractorRegistry {
    extractors: Vec<(DocumentKind, Box<dyn TextExtractor>)>,
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractorRegistry {
    /// Registry with the PDF and DOCX extractors
    pub fn new() -> Self {
        Self::empty()
            .register(DocumentKind::Pdf, PdfExtractor)
            .register(DocumentKind::Docx, DocxExtractor::new())
    }

    pub fn empty() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }

    /// Register (or replace) the extractor for a kind
    pub fn register<E: TextExtractor + 'static>(mut self, kind: DocumentKind, extractor: E) -> Self {
        self.extractors.retain(|(registered, _)| registered != &kind);
        self.extractors.push((kind, Box::new(extractor)));
        self
    }

    pub fn supports(&self, kind: &DocumentKind) -> bool {
        self.extractors.iter().any(|(registered, _)| registered == kind)
    }

    /// Extract raw text. Unsupported kinds yield an empty string, not an error.
    pub fn extract(&self, document: &Document) -> Result<String> {
        let extractor = self
            .extractors
            .iter()
            .find(|(kind, _)| kind == &document.kind)
            .map(|(_, extractor)| extractor);

        match extractor {
            Some(extractor) => {
                info!("Extracting text from {}", document.describe());
                let text = extractor.extract(&document.bytes)?;
                info!("Extracted {} characters", text.chars().count());
                Ok(text)
            }
            None => {
                warn!(
                    "No extractor for {}; continuing with empty resume text",
                    document.describe()
                );
                Ok(String::new())
            }
        }
    }
}

struct XmlTag<'a> {
    name: &'a str,
    attributes: &'a str,
    closing: bool,
    self_closing: bool,
}

impl<'a> XmlTag<'a> {
    fn parse(raw: &'a str) -> Self {
        let inner = raw.trim_start_matches('<').trim_end_matches('>');
        let closing = inner.starts_with('/');
        let self_closing = inner.ends_with('/');
        let body = inner.trim_start_matches('/').trim_end_matches('/');
        let name_end = body
            .find(|c: char| c.is_whitespace())
            .unwrap_or(body.len());

        Self {
            name: &body[..name_end],
            attributes: &body[name_end..],
            closing,
            self_closing,
        }
    }

    /// Value of a quoted attribute, e.g. `w:type="page"`
    fn attribute(&self, name: &str) -> Option<&'a str> {
        let mut rest = self.attributes;

        while let Some(eq) = rest.find('=') {
            let key = rest[..eq].trim();
            let after = rest[eq + 1..].trim_start();
            let quote = after.chars().next()?;
            if quote != '"' && quote != '\'' {
                return None;
            }
            let value_end = after[1..].find(quote)? + 1;
            if key == name {
                return Some(&after[1..value_end]);
            }
            rest = &after[value_end + 1..];
        }

        None
    }
}

/// Decode the predefined XML entities and numeric character references
fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    let mut decoded = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        decoded.push_str(&rest[..amp]);
        let after = &rest[amp..];

        let replacement = after.find(';').and_then(|semi| {
            let entity = &after[1..semi];
            let ch = match entity {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                _ if entity.starts_with("#x") || entity.starts_with("#X") => {
                    u32::from_str_radix(&entity[2..], 16).ok().and_then(char::from_u32)
                }
                _ if entity.starts_with('#') => {
                    entity[1..].parse::<u32>().ok().and_then(char::from_u32)
                }
                _ => None,
            };
            ch.map(|c| (c, semi + 1))
        });

        match replacement {
            Some((ch, consumed)) => {
                decoded.push(ch);
                rest = &after[consumed..];
            }
            None => {
                decoded.push('&');
                rest = &after[1..];
            }
        }
    }

    decoded.push_str(rest);
    decoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn docx_bytes(document_xml: &str) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = zip::write::FileOptions::default();
        writer.start_file("[Content_Types].xml", options).unwrap();
        writer.write_all(b"<?xml version=\"1.0\"?><Types/>").unwrap();
        writer.start_file(DOCX_BODY_PART, options).unwrap();
        writer.write_all(document_xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    fn wrap_body(body: &str) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
             <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
             <w:body>{}<w:sectPr/></w:body></w:document>",
            body
        )
    }

    #[test]
    fn test_docx_paragraphs_joined_with_newlines() {
        let xml = wrap_body(
            "<w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>\
             <w:p><w:pPr><w:pStyle w:val=\"Heading1\"/></w:pPr>\
             <w:r><w:t xml:space=\"preserve\">Python </w:t></w:r><w:r><w:t>Developer</w:t></w:r></w:p>",
        );

        let text = DocxExtractor::new().extract(&docx_bytes(&xml)).unwrap();
        assert_eq!(text, "Jane Doe\nPython Developer");
    }

    #[test]
    fn test_docx_tabs_breaks_and_entities() {
        let xml = wrap_body(
            "<w:p><w:pPr><w:tabs><w:tab w:val=\"left\" w:pos=\"720\"/></w:tabs></w:pPr>\
             <w:r><w:t>R&amp;D</w:t><w:tab/><w:t>2019 &#8211; 2023</w:t><w:br/><w:t>&lt;lead&gt;</w:t></w:r></w:p>",
        );

        let text = DocxExtractor::new().extract(&docx_bytes(&xml)).unwrap();
        assert_eq!(text, "R&D\t2019 \u{2013} 2023\n<lead>");
    }

    #[test]
    fn test_docx_skips_table_paragraphs_keeps_empty_ones() {
        let xml = wrap_body(
            "<w:p><w:r><w:t>Summary</w:t></w:r></w:p>\
             <w:tbl><w:tr><w:tc><w:p><w:r><w:t>cell</w:t></w:r></w:p></w:tc></w:tr></w:tbl>\
             <w:p/>\
             <w:p><w:r><w:t>Skills</w:t></w:r></w:p>",
        );

        let text = DocxExtractor::new().extract(&docx_bytes(&xml)).unwrap();
        assert_eq!(text, "Summary\n\nSkills");
    }

    #[test]
    fn test_docx_page_and_column_breaks_add_nothing() {
        let xml = wrap_body(
            "<w:p><w:r><w:t>Experience</w:t><w:br w:type=\"page\"/><w:t>Acme</w:t>\
             <w:br w:type='column'/><w:t>Corp</w:t><w:br w:type=\"textWrapping\" w:clear=\"all\"/>\
             <w:t>2021</w:t><w:cr/><w:t>2023</w:t></w:r></w:p>",
        );

        let text = DocxExtractor::new().extract(&docx_bytes(&xml)).unwrap();
        assert_eq!(text, "ExperienceAcmeCorp\n2021\n2023");
    }

    #[test]
    fn test_docx_skips_paragraphs_in_body_level_wrappers() {
        let xml = wrap_body(
            "<w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>\
             <w:sdt><w:sdtPr><w:alias w:val=\"Contact\"/></w:sdtPr>\
             <w:sdtContent><w:p><w:r><w:t>jane@example.com</w:t></w:r></w:p></w:sdtContent></w:sdt>\
             <w:customXml w:element=\"profile\"><w:p><w:r><w:t>hidden</w:t></w:r></w:p></w:customXml>\
             <w:p><w:r><w:t>Rust</w:t></w:r><w:sdt><w:sdtContent><w:r><w:t> Engineer</w:t></w:r></w:sdtContent></w:sdt></w:p>",
        );

        let text = DocxExtractor::new().extract(&docx_bytes(&xml)).unwrap();
        assert_eq!(text, "Jane Doe\nRust Engineer");
    }

    #[test]
    fn test_xml_tag_attributes() {
        let tag = XmlTag::parse("<w:br w:type=\"page\" w:clear='all'/>");
        assert_eq!(tag.name, "w:br");
        assert!(tag.self_closing);
        assert_eq!(tag.attribute("w:type"), Some("page"));
        assert_eq!(tag.attribute("w:clear"), Some("all"));
        assert_eq!(tag.attribute("w:val"), None);
        assert_eq!(XmlTag::parse("<w:br/>").attribute("w:type"), None);
    }

    #[test]
    fn test_corrupt_docx_is_an_extraction_error() {
        let result = DocxExtractor::new().extract(b"definitely not a zip archive");
        assert!(matches!(
            result,
            Err(AtsCheckerError::Extraction { kind: DocumentKind::Docx, .. })
        ));
    }

    #[test]
    fn test_docx_without_body_part_is_an_extraction_error() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/styles.xml", zip::write::FileOptions::default())
            .unwrap();
        writer.write_all(b"<w:styles/>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        assert!(DocxExtractor::new().extract(&bytes).is_err());
    }

    const THREE_PAGE_PDF: &[u8] = include_bytes!("../../tests/fixtures/resume_three_pages.pdf");

    #[test]
    fn test_pdf_pages_joined_in_order_without_separator() {
        let pages = pdf_extract::extract_text_from_mem_by_pages(THREE_PAGE_PDF).unwrap();
        assert_eq!(pages.len(), 3);
        assert!(pages[0].contains("Python"));
        assert!(pages[1].trim().is_empty());
        assert!(pages[2].contains("Flask"));

        let registry = ExtractorRegistry::new();
        let doc = Document::new(THREE_PAGE_PDF.to_vec(), DocumentKind::Pdf);
        let text = registry.extract(&doc).unwrap();

        assert_eq!(text, pages.concat());
        let python = text.find("Python").unwrap();
        let flask = text.find("Flask").unwrap();
        assert!(python < flask);
    }

    #[test]
    fn test_corrupt_pdf_is_an_extraction_error() {
        let result = PdfExtractor.extract(b"%PDF-1.4\nthis is not really a pdf");
        assert!(matches!(
            result,
            Err(AtsCheckerError::Extraction { kind: DocumentKind::Pdf, .. })
        ));
    }

    #[test]
    fn test_unrecognized_kind_yields_empty_text() {
        let registry = ExtractorRegistry::new();
        let doc = Document::from_mime(b"plain text resume".to_vec(), "text/plain");

        assert!(!registry.supports(&doc.kind));
        assert_eq!(registry.extract(&doc).unwrap(), "");
    }

    #[test]
    fn test_registry_accepts_custom_extractor() {
        struct Utf8Extractor;

        impl TextExtractor for Utf8Extractor {
            fn extract(&self, bytes: &[u8]) -> Result<String> {
                Ok(String::from_utf8_lossy(bytes).into_owned())
            }
        }

        let kind = DocumentKind::from_mime("text/plain");
        let registry = ExtractorRegistry::new().register(kind.clone(), Utf8Extractor);
        let doc = Document::new(b"Rust developer".to_vec(), kind);

        assert_eq!(registry.extract(&doc).unwrap(), "Rust developer");
    }

    #[test]
    fn test_decode_entities_leaves_unknown_sequences() {
        assert_eq!(decode_entities("AT&T &bogus; &#x41;"), "AT&T &bogus; A");
    }
}
