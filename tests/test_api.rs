//! Tests for the request/response layer.

use arabic_proofreader::api::ProofreaderService;
use arabic_proofreader::ProofreaderConfig;
use serde_json::json;
use std::io::Write;

fn docx_bytes() -> Vec<u8> {
    let document = r#"<?xml version="1.0" encoding="UTF-8"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body><w:p><w:r><w:t>النص كتير</w:t></w:r></w:p></w:body>
</w:document>"#;

    let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    writer
        .start_file("word/document.xml", zip::write::SimpleFileOptions::default())
        .unwrap();
    writer.write_all(document.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

#[test]
fn test_upload_docx() {
    let response = ProofreaderService::new().upload(&docx_bytes(), "uploads/../بحث.docx");
    assert_eq!(response.status, 200);

    let body = &response.body;
    assert_eq!(body["success"], true);
    assert_eq!(body["text"], "النص كتير");
    // File info and document metadata share one object
    assert_eq!(body["metadata"]["filename"], "بحث.docx");
    assert_eq!(body["metadata"]["extension"], ".docx");
    assert_eq!(body["metadata"]["is_supported"], true);
    assert_eq!(body["metadata"]["file_type"], "DOCX");
    assert_eq!(body["stats"]["total_words"], 2);
    assert_eq!(body["stats"]["paragraphs"], 1);
}

#[test]
fn test_upload_unsupported_type() {
    let response = ProofreaderService::new().upload(b"plain text", "notes.txt");
    assert_eq!(response.status, 400);
    assert_eq!(response.body["error"], "نوع الملف غير مدعوم. يرجى رفع ملف PDF أو Word");
    assert_eq!(response.body["error_type"], "unsupported_file_type");
}

#[test]
fn test_upload_too_large() {
    let service = ProofreaderService::with_config(ProofreaderConfig::new().with_max_file_size(8));
    let response = service.upload(&docx_bytes(), "big.docx");
    assert_eq!(response.status, 400);
    assert_eq!(response.body["error_type"], "file_too_large");
}

#[test]
fn test_upload_broken_document() {
    let response = ProofreaderService::new().upload(b"not a zip", "broken.docx");
    assert_eq!(response.status, 500);
    assert_eq!(response.body["error_type"], "docx_extraction_error");
    assert!(response.body["error"]
        .as_str()
        .unwrap()
        .starts_with("خطأ في قراءة ملف Word"));
}

#[test]
fn test_upload_leaves_no_staged_files() {
    let dir = tempfile::tempdir().unwrap();
    let service = ProofreaderService::new().with_upload_dir(dir.path());
    let small = ProofreaderService::with_config(ProofreaderConfig::new().with_max_file_size(8))
        .with_upload_dir(dir.path());
    assert_eq!(service.upload_dir(), dir.path());

    let staged = || std::fs::read_dir(dir.path()).unwrap().count();

    assert_eq!(service.upload(b"not a zip", "broken.docx").status, 500);
    assert_eq!(staged(), 0);
    assert_eq!(service.upload(b"plain text", "notes.txt").status, 400);
    assert_eq!(staged(), 0);
    assert_eq!(small.upload(&docx_bytes(), "big.docx").status, 400);
    assert_eq!(staged(), 0);
    assert_eq!(service.upload(&docx_bytes(), "paper.docx").status, 200);
    assert_eq!(staged(), 0);
}

#[test]
fn test_proofread() {
    let response = ProofreaderService::new().proofread(&json!({ "text": "هذا  النص  كتير  حلو." }));
    assert_eq!(response.status, 200);

    let body = &response.body;
    assert_eq!(body["success"], true);
    assert_eq!(body["original_text"], "هذا  النص  كتير  حلو.");
    assert_eq!(body["corrected_text"], "هذا النص كثير حلو.");
    assert_eq!(body["suggestions"][0]["type"], "spelling");
    assert_eq!(body["suggestions"][0]["original"], "كتير");
    assert_eq!(body["stats"]["suggestions_count"], 1);
    assert_eq!(body["stats"]["improvement_types"], json!(["spelling"]));
}

#[test]
fn test_proofread_validation() {
    let service = ProofreaderService::new();

    let missing = service.proofread(&json!({ "content": "نص" }));
    assert_eq!(missing.status, 400);
    assert_eq!(missing.body["error"], "النص مطلوب");

    let blank = service.proofread(&json!({ "text": " \n " }));
    assert_eq!(blank.status, 400);
    assert_eq!(blank.body["error"], "النص فارغ");
}

#[test]
fn test_analyze() {
    let response = ProofreaderService::new().analyze(&json!({ "text": "جملة أولى. جملة ثانية." }));
    assert_eq!(response.status, 200);

    let analysis = &response.body["analysis"];
    assert_eq!(analysis["word_count"], 4);
    assert_eq!(analysis["sentence_count"], 2);
    assert_eq!(analysis["avg_words_per_sentence"], 2.0);
    assert_eq!(analysis["readability"]["complexity"], "simple");
    assert_eq!(analysis["readability"]["label"], "بسيط");
}

#[test]
fn test_analyze_requires_text() {
    let response = ProofreaderService::new().analyze(&json!(null));
    assert_eq!(response.status, 400);
}

#[test]
fn test_health() {
    let response = ProofreaderService::new().health();
    assert_eq!(response.status, 200);
    assert_eq!(response.body["service"], "Arabic Proofreader API");
    assert_eq!(response.body["features"][0], "file_extraction");
}
