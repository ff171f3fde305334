//! PDF text extraction.
//!
//! Text is pulled page by page through `lopdf`. A page whose content cannot be
//! decoded contributes an empty string and a warning; only failure to load the
//! document itself is fatal.

use super::cleanup::clean_extracted_text;
use super::{DocumentMetadata, ExtractionResult, ExtractionStats, FileType, PageText};
use crate::error::{Error, Result};
use crate::text::word_count;
use lopdf::{Dictionary, Document, Object};

/// Extract text, per-page word counts and Info metadata from PDF bytes.
pub fn extract_pdf(bytes: &[u8]) -> Result<ExtractionResult> {
    let doc = Document::load_mem(bytes).map_err(|e| Error::PdfExtraction(e.to_string()))?;

    let pages = doc.get_pages();
    let page_count = pages.len();
    log::debug!("PDF loaded: {} page(s)", page_count);

    let mut full_text = String::new();
    let mut page_texts = Vec::with_capacity(page_count);

    // BTreeMap keys are already in page order
    for &page_number in pages.keys() {
        let text = match doc.extract_text(&[page_number]) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("Page {} text extraction failed: {}", page_number, e);
                String::new()
            },
        };

        page_texts.push(PageText {
            page_number: page_number as usize,
            word_count: word_count(&text),
            text: text.clone(),
        });
        full_text.push_str(&text);
        full_text.push('\n');
    }

    let text = clean_extracted_text(&full_text);
    let info = info_dictionary(&doc);
    let field = |key: &[u8]| info.and_then(|dict| text_field(&doc, dict, key)).unwrap_or_default();

    let metadata = DocumentMetadata {
        title: field(b"Title"),
        author: field(b"Author"),
        subject: field(b"Subject"),
        creator: Some(field(b"Creator")),
        created: None,
        modified: None,
        page_count: Some(page_count),
        file_type: FileType::Pdf,
    };

    let stats = ExtractionStats {
        total_words: word_count(&text),
        total_characters: text.chars().count(),
        pages: Some(page_count),
        paragraphs: None,
        tables: None,
    };

    Ok(ExtractionResult {
        text,
        metadata,
        stats,
        pages: page_texts,
        structure: None,
    })
}

/// The trailer's /Info dictionary, if present.
fn info_dictionary(doc: &Document) -> Option<&Dictionary> {
    let info = doc.trailer.get(b"Info").ok()?;
    let (_, object) = doc.dereference(info).ok()?;
    object.as_dict().ok()
}

/// Read a text string entry from a dictionary, following references.
fn text_field(doc: &Document, dict: &Dictionary, key: &[u8]) -> Option<String> {
    let value = dict.get(key).ok()?;
    let (_, value) = doc.dereference(value).ok()?;
    match value {
        Object::String(bytes, _) => Some(decode_text_string(bytes)),
        Object::Name(name) => Some(String::from_utf8_lossy(name).into_owned()),
        _ => None,
    }
}

/// Decode a PDF text string: UTF-16BE when it starts with a byte order mark,
/// otherwise one byte per character (PDFDocEncoding, approximated as Latin-1).
pub(crate) fn decode_text_string(bytes: &[u8]) -> String {
    if let Some(utf16) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = utf16
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        return String::from_utf16_lossy(&units);
    }
    if let Some(utf8) = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]) {
        return String::from_utf8_lossy(utf8).into_owned();
    }
    bytes.iter().map(|&b| b as char).collect()
}
