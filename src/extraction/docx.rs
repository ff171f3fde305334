//! DOCX text extraction.
//!
//! DOCX files are ZIP archives containing XML files in Open XML format.
//! The main content is in `word/document.xml`, style names in
//! `word/styles.xml` and core properties in `docProps/core.xml`.
//!
//! Body paragraphs (those outside tables) are emitted first, one per line;
//! tables follow, one row per line with cells joined by ` | `.

use super::cleanup::clean_extracted_text;
use super::{
    DocumentMetadata, DocumentStructure, ExtractionResult, ExtractionStats, FileType,
    ParagraphText, TableText,
};
use crate::error::{Error, Result};
use crate::text::word_count;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashMap;
use std::io::{Cursor, Read, Seek};
use zip::ZipArchive;

const DEFAULT_STYLE: &str = "Normal";

/// Extract text, paragraph structure, tables and core properties from DOCX bytes.
pub fn extract_docx(bytes: &[u8]) -> Result<ExtractionResult> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| Error::DocxExtraction(format!("Failed to open DOCX archive: {}", e)))?;

    let document_xml = read_entry(&mut archive, "word/document.xml")?
        .ok_or_else(|| Error::DocxExtraction("Missing word/document.xml".to_string()))?;
    let style_names = match read_entry(&mut archive, "word/styles.xml")? {
        Some(xml) => parse_style_names(&xml),
        None => HashMap::new(),
    };
    let properties = match read_entry(&mut archive, "docProps/core.xml")? {
        Some(xml) => parse_core_properties(&xml),
        None => CoreProperties::default(),
    };

    let body = parse_body(&document_xml, &style_names)?;
    log::debug!(
        "DOCX parsed: {} paragraph(s), {} table(s)",
        body.paragraphs.len(),
        body.tables.len()
    );

    let mut full_text = String::new();
    for paragraph in &body.paragraphs {
        full_text.push_str(&paragraph.text);
        full_text.push('\n');
    }
    for table in &body.tables {
        for row in &table.content {
            full_text.push_str(&row.join(" | "));
            full_text.push('\n');
        }
    }

    let text = clean_extracted_text(&full_text);

    let metadata = DocumentMetadata {
        title: properties.title,
        author: properties.creator,
        subject: properties.subject,
        creator: None,
        created: Some(render_timestamp(&properties.created)),
        modified: Some(render_timestamp(&properties.modified)),
        page_count: None,
        file_type: FileType::Docx,
    };

    let stats = ExtractionStats {
        total_words: word_count(&text),
        total_characters: text.chars().count(),
        pages: None,
        paragraphs: Some(body.paragraphs.len()),
        tables: Some(body.tables.len()),
    };

    Ok(ExtractionResult {
        text,
        metadata,
        stats,
        pages: Vec::new(),
        structure: Some(body),
    })
}

/// Read a ZIP entry as UTF-8; `None` if the entry does not exist.
fn read_entry<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<Option<String>> {
    let mut file = match archive.by_name(name) {
        Ok(file) => file,
        Err(zip::result::ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(Error::DocxExtraction(format!("Failed to open {}: {}", name, e))),
    };

    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|e| Error::DocxExtraction(format!("Failed to read {}: {}", name, e)))?;
    Ok(Some(content))
}

/// Outermost-table builder state.
#[derive(Default)]
struct TableBuilder {
    rows: Vec<Vec<String>>,
    row: Vec<String>,
    cell: Vec<String>,
}

/// Parse `word/document.xml` into body paragraphs and tables.
fn parse_body(xml: &str, style_names: &HashMap<String, String>) -> Result<DocumentStructure> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(false);

    let mut buf = Vec::new();
    let mut structure = DocumentStructure::default();

    let mut body_index = 0usize;
    let mut table_depth = 0usize;
    let mut table = TableBuilder::default();

    let mut paragraph = String::new();
    let mut style_id: Option<String> = None;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"p" => {
                    paragraph.clear();
                    style_id = None;
                },
                b"t" => in_text = true,
                b"pStyle" => style_id = get_attribute(e, "val"),
                b"tbl" => {
                    table_depth += 1;
                    if table_depth == 1 {
                        table = TableBuilder::default();
                    }
                },
                b"tr" if table_depth == 1 => table.row.clear(),
                b"tc" if table_depth == 1 => table.cell.clear(),
                _ => {},
            },
            Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                b"pStyle" => style_id = get_attribute(e, "val"),
                b"tab" => paragraph.push('\t'),
                b"br" | b"cr" => paragraph.push('\n'),
                b"p" if table_depth == 0 => body_index += 1,
                _ => {},
            },
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"p" => {
                    if table_depth == 0 {
                        body_index += 1;
                        let text = paragraph.trim();
                        if !text.is_empty() {
                            let style = style_id
                                .as_ref()
                                .and_then(|id| style_names.get(id))
                                .map(String::as_str)
                                .unwrap_or(DEFAULT_STYLE);
                            structure.paragraphs.push(ParagraphText {
                                paragraph_number: body_index,
                                text: text.to_string(),
                                style: style.to_string(),
                            });
                        }
                    } else {
                        table.cell.push(paragraph.clone());
                    }
                    paragraph.clear();
                },
                b"tc" if table_depth == 1 => {
                    let cell = table.cell.join("\n");
                    table.row.push(cell.trim().to_string());
                },
                b"tr" if table_depth == 1 => {
                    let row = std::mem::take(&mut table.row);
                    table.rows.push(row);
                },
                b"tbl" => {
                    table_depth = table_depth.saturating_sub(1);
                    if table_depth == 0 {
                        structure.tables.push(TableText {
                            table_number: structure.tables.len() + 1,
                            content: std::mem::take(&mut table.rows),
                        });
                    }
                },
                _ => {},
            },
            Ok(Event::Text(e)) => {
                if in_text {
                    let text = e
                        .unescape()
                        .map_err(|e| Error::DocxExtraction(format!("XML parse error: {}", e)))?;
                    paragraph.push_str(&text);
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::DocxExtraction(format!("XML parse error: {}", e)));
            },
            _ => {},
        }
        buf.clear();
    }

    Ok(structure)
}

/// Map style ids to display names from `word/styles.xml`.
fn parse_style_names(xml: &str) -> HashMap<String, String> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut buf = Vec::new();
    let mut names = HashMap::new();
    let mut current: Option<String> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                b"style" => current = get_attribute(e, "styleId"),
                b"name" => {
                    if let (Some(id), Some(name)) = (current.as_ref(), get_attribute(e, "val")) {
                        names.insert(id.clone(), name);
                    }
                },
                _ => {},
            },
            Ok(Event::End(ref e)) => {
                if e.local_name().as_ref() == b"style" {
                    current = None;
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                log::warn!("Ignoring malformed styles.xml: {}", e);
                break;
            },
            _ => {},
        }
        buf.clear();
    }

    names
}

/// Core document properties.
#[derive(Debug, Default, PartialEq)]
struct CoreProperties {
    title: String,
    creator: String,
    subject: String,
    created: String,
    modified: String,
}

/// Parse `docProps/core.xml`. Malformed XML yields whatever was read so far.
fn parse_core_properties(xml: &str) -> CoreProperties {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut buf = Vec::new();
    let mut properties = CoreProperties::default();
    let mut field: Option<Vec<u8>> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => field = Some(e.local_name().as_ref().to_vec()),
            Ok(Event::End(_)) => field = None,
            Ok(Event::Text(e)) => {
                let value = e.unescape().unwrap_or_default().to_string();
                match field.as_deref() {
                    Some(b"title") => properties.title = value,
                    Some(b"creator") => properties.creator = value,
                    Some(b"subject") => properties.subject = value,
                    Some(b"created") => properties.created = value,
                    Some(b"modified") => properties.modified = value,
                    _ => {},
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                log::warn!("Ignoring malformed core.xml: {}", e);
                break;
            },
            _ => {},
        }
        buf.clear();
    }

    properties
}

/// Render a W3CDTF timestamp as `YYYY-MM-DD HH:MM:SS+HH:MM`, keeping its offset.
///
/// Empty input stays empty; unparsable input is returned unchanged.
fn render_timestamp(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M:%S%:z").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Helper to get an attribute value from an XML element.
fn get_attribute(e: &BytesStart, name: &str) -> Option<String> {
    // Check both with and without namespace prefix
    for attr in e.attributes().flatten() {
        let key = attr.key.local_name();
        if key.as_ref() == name.as_bytes() {
            return Some(String::from_utf8_lossy(&attr.value).to_string());
        }
    }
    None
}
