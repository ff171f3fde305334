//! Integration tests for the extraction adapter.
//!
//! PDF fixtures are generated with lopdf and DOCX fixtures with zip, so the
//! tests need no binary files on disk.

use arabic_proofreader::{Error, FileExtractor, FileType, ProofreaderConfig};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};
use std::io::Write;

/// A one-page PDF that shows "Hello World" and carries an Info dictionary.
fn build_pdf() -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let content = Content {
        operations: vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 24.into()]),
            Operation::new("Td", vec![100.into(), 600.into()]),
            Operation::new("Tj", vec![Object::string_literal("Hello World")]),
            Operation::new("ET", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    // "بحث" as a UTF-16BE text string with byte order mark
    let author = vec![0xFE, 0xFF, 0x06, 0x28, 0x06, 0x2D, 0x06, 0x2B];
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal("Study"),
        "Author" => Object::String(author, StringFormat::Hexadecimal),
    });
    doc.trailer.set("Info", info_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:style w:type="paragraph" w:styleId="Normal"><w:name w:val="Normal"/></w:style>
  <w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/></w:style>
</w:styles>"#;

const DOCUMENT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:pPr><w:pStyle w:val="Heading1"/></w:pPr><w:r><w:t>مقدمة</w:t></w:r></w:p>
    <w:p/>
    <w:p><w:r><w:t xml:space="preserve">إن البحث </w:t></w:r><w:r><w:t>العلمي</w:t></w:r></w:p>
    <w:tbl>
      <w:tr>
        <w:tc><w:p><w:r><w:t>أ</w:t></w:r></w:p></w:tc>
        <w:tc><w:p><w:r><w:t>ب</w:t></w:r></w:p></w:tc>
      </w:tr>
      <w:tr>
        <w:tc><w:p><w:r><w:t>ج</w:t></w:r></w:p></w:tc>
        <w:tc><w:p><w:r><w:t>د</w:t></w:r></w:p></w:tc>
      </w:tr>
    </w:tbl>
    <w:sectPr/>
  </w:body>
</w:document>"#;

const CORE_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <dc:title>دراسة</dc:title>
  <dc:creator>Sara</dc:creator>
  <dcterms:created xsi:type="dcterms:W3CDTF">2024-03-01T10:15:00Z</dcterms:created>
</cp:coreProperties>"#;

fn build_docx(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default();
    for (name, content) in entries {
        writer.start_file(*name, options).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

fn full_docx() -> Vec<u8> {
    build_docx(&[
        ("word/document.xml", DOCUMENT_XML),
        ("word/styles.xml", STYLES_XML),
        ("docProps/core.xml", CORE_XML),
    ])
}

#[test]
fn test_unsupported_extension_short_circuits() {
    // Valid PDF bytes are never parsed under a .txt name
    let err = FileExtractor::new().extract_bytes(&build_pdf(), "notes.txt").unwrap_err();
    assert!(matches!(err, Error::UnsupportedFileType(_)));
    assert_eq!(err.error_type(), "unsupported_file_type");
    assert_eq!(err.localized_message(), "نوع الملف غير مدعوم. يرجى رفع ملف PDF أو Word");
}

#[test]
fn test_file_too_large() {
    let extractor = FileExtractor::with_config(ProofreaderConfig::new().with_max_file_size(16));
    let err = extractor.extract_bytes(&build_pdf(), "paper.pdf").unwrap_err();
    assert_eq!(err.error_type(), "file_too_large");
}

#[test]
fn test_pdf_text_and_metadata() {
    let result = FileExtractor::new().extract_bytes(&build_pdf(), "paper.PDF").unwrap();

    assert!(result.text.contains("Hello"));
    assert_eq!(result.metadata.file_type, FileType::Pdf);
    assert_eq!(result.metadata.title, "Study");
    assert_eq!(result.metadata.author, "بحث");
    assert_eq!(result.metadata.subject, "");
    assert_eq!(result.metadata.creator.as_deref(), Some(""));
    assert_eq!(result.metadata.page_count, Some(1));

    assert_eq!(result.pages.len(), 1);
    assert_eq!(result.pages[0].page_number, 1);
    assert!(result.pages[0].word_count >= 1);

    assert_eq!(result.stats.pages, Some(1));
    assert_eq!(result.stats.paragraphs, None);
    assert_eq!(result.stats.total_characters, result.text.chars().count());

    let json = serde_json::to_value(&result.metadata).unwrap();
    assert_eq!(json["file_type"], "PDF");
    assert_eq!(json["page_count"], 1);
    assert!(json.get("pages").is_none());
    assert!(json.get("created").is_none());
}

#[test]
fn test_broken_pdf() {
    let err = FileExtractor::new().extract_bytes(b"%PDF-1.4 nothing else", "x.pdf").unwrap_err();
    assert_eq!(err.error_type(), "pdf_extraction_error");
    assert!(err.localized_message().starts_with("خطأ في قراءة ملف PDF"));
}

#[test]
fn test_docx_text_structure_and_properties() {
    let result = FileExtractor::new().extract_bytes(&full_docx(), "thesis.docx").unwrap();

    // Table separators fall outside the allowed character set
    assert_eq!(result.text, "مقدمة\nان البحث العلمي\nا  ب\nج  د");

    let structure = result.structure.as_ref().unwrap();
    assert_eq!(structure.paragraphs.len(), 2);
    assert_eq!(structure.paragraphs[0].paragraph_number, 1);
    assert_eq!(structure.paragraphs[0].style, "heading 1");
    assert_eq!(structure.paragraphs[1].paragraph_number, 3);
    assert_eq!(structure.paragraphs[1].text, "إن البحث العلمي");
    assert_eq!(structure.paragraphs[1].style, "Normal");
    assert_eq!(structure.tables.len(), 1);
    assert_eq!(structure.tables[0].content[1], vec!["ج".to_string(), "د".to_string()]);

    assert_eq!(result.metadata.file_type, FileType::Docx);
    assert_eq!(result.metadata.title, "دراسة");
    assert_eq!(result.metadata.author, "Sara");
    assert_eq!(result.metadata.created.as_deref(), Some("2024-03-01 10:15:00+00:00"));
    assert_eq!(result.metadata.modified.as_deref(), Some(""));
    assert_eq!(result.metadata.page_count, None);

    assert_eq!(result.stats.total_words, 8);
    assert_eq!(result.stats.paragraphs, Some(2));
    assert_eq!(result.stats.tables, Some(1));
    assert!(result.pages.is_empty());
}

#[test]
fn test_docx_without_optional_parts() {
    let bytes = build_docx(&[("word/document.xml", DOCUMENT_XML)]);
    let result = FileExtractor::new().extract_bytes(&bytes, "thesis.docx").unwrap();

    let structure = result.structure.unwrap();
    assert_eq!(structure.paragraphs[0].style, "Normal");
    assert_eq!(result.metadata.title, "");
    assert_eq!(result.metadata.created.as_deref(), Some(""));
}

#[test]
fn test_docx_missing_document_part() {
    let bytes = build_docx(&[("docProps/core.xml", CORE_XML)]);
    let err = FileExtractor::new().extract_bytes(&bytes, "thesis.docx").unwrap_err();
    assert_eq!(err.error_type(), "docx_extraction_error");
}

#[test]
fn test_legacy_doc_routes_to_word_reader() {
    let err = FileExtractor::new()
        .extract_bytes(&[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1], "old.doc")
        .unwrap_err();
    assert_eq!(err.error_type(), "docx_extraction_error");
}

#[test]
fn test_extract_file_and_file_info() {
    let mut file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
    file.write_all(&full_docx()).unwrap();
    file.flush().unwrap();

    let extractor = FileExtractor::new();
    let info = extractor.file_info(file.path(), "Thesis.DOCX").unwrap();
    assert_eq!(info.extension, ".docx");
    assert!(info.is_supported);
    assert!(info.size_valid);
    assert!(info.size_bytes > 0);
    assert_eq!(info.size_mb, 0.0);

    let result = extractor.extract_file(file.path(), "Thesis.DOCX").unwrap();
    assert_eq!(result.metadata.file_type, FileType::Docx);
}

#[test]
fn test_ha_is_rewritten_in_extracted_text() {
    let xml = DOCUMENT_XML.replace("مقدمة", "هذه");
    let bytes = build_docx(&[("word/document.xml", xml.as_str())]);
    let result = FileExtractor::new().extract_bytes(&bytes, "a.docx").unwrap();
    assert!(result.text.starts_with("ةذة\n"));
}
