//! Extraction adapter: turns uploaded PDF and Word files into cleaned text
//! plus metadata and statistics.
//!
//! The adapter checks the file extension first, then the size, and only then
//! parses the document. Unsupported types never reach a parser.

pub mod cleanup;
mod docx;
mod pdf;

pub use cleanup::clean_extracted_text;

use crate::config::{ProofreaderConfig, SUPPORTED_EXTENSIONS};
use crate::error::{Error, Result};
use crate::text::round2;
use serde::Serialize;
use std::path::Path;

/// Document container formats the adapter can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FileType {
    /// Portable Document Format
    #[serde(rename = "PDF")]
    Pdf,
    /// Word Open XML (`.docx`, and `.doc` treated the same way)
    #[serde(rename = "DOCX")]
    Docx,
}

impl FileType {
    /// Resolve a lower-cased extension including the dot (`".pdf"`).
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            ".pdf" => Some(Self::Pdf),
            ".docx" | ".doc" => Some(Self::Docx),
            _ => None,
        }
    }
}

/// Lower-cased extension of `filename`, including the dot; empty if none.
pub fn file_extension(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

/// Facts about an uploaded file, gathered before parsing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileInfo {
    /// Client-supplied filename
    pub filename: String,
    /// Size on disk
    pub size_bytes: u64,
    /// Size in MiB, two decimals
    pub size_mb: f64,
    /// Lower-cased extension with dot
    pub extension: String,
    /// Whether the extension is accepted
    pub is_supported: bool,
    /// Whether the size is within the configured limit
    pub size_valid: bool,
}

/// Document-level metadata.
///
/// PDF files fill `creator` and `page_count`; Word files fill `created` and
/// `modified`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentMetadata {
    pub title: String,
    pub author: String,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<usize>,
    pub file_type: FileType,
}

/// Counts over the cleaned text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractionStats {
    pub total_words: usize,
    pub total_characters: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paragraphs: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tables: Option<usize>,
}

/// Raw text of one PDF page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageText {
    /// 1-based page number
    pub page_number: usize,
    pub text: String,
    pub word_count: usize,
}

/// A non-empty body paragraph of a Word document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParagraphText {
    /// 1-based index among all body paragraphs, empty ones included
    pub paragraph_number: usize,
    pub text: String,
    /// Display name of the paragraph style
    pub style: String,
}

/// A Word table as rows of cell strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableText {
    /// 1-based
    pub table_number: usize,
    pub content: Vec<Vec<String>>,
}

/// Paragraph and table structure of a Word document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DocumentStructure {
    pub paragraphs: Vec<ParagraphText>,
    pub tables: Vec<TableText>,
}

/// Output of a successful extraction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractionResult {
    /// Cleaned full text
    pub text: String,
    pub metadata: DocumentMetadata,
    pub stats: ExtractionStats,
    /// Per-page text (PDF only)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<PageText>,
    /// Paragraphs and tables (Word only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structure: Option<DocumentStructure>,
}

/// Validates and dispatches uploaded files to the matching reader.
#[derive(Debug, Clone, Default)]
pub struct FileExtractor {
    config: ProofreaderConfig,
}

impl FileExtractor {
    /// Create an extractor with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with custom configuration.
    pub fn with_config(config: ProofreaderConfig) -> Self {
        Self { config }
    }

    /// Whether `filename` has an accepted extension (case-insensitive).
    pub fn is_supported_file(&self, filename: &str) -> bool {
        SUPPORTED_EXTENSIONS.contains(&file_extension(filename).as_str())
    }

    /// Whether `size` bytes is within the configured limit.
    pub fn validate_file_size(&self, size: u64) -> bool {
        size <= self.config.max_file_size
    }

    /// Gather [`FileInfo`] for a stored upload.
    pub fn file_info(&self, path: &Path, filename: &str) -> Result<FileInfo> {
        let size_bytes = std::fs::metadata(path)?.len();
        Ok(FileInfo {
            filename: filename.to_string(),
            size_bytes,
            size_mb: round2(size_bytes as f64 / (1024.0 * 1024.0)),
            extension: file_extension(filename),
            is_supported: self.is_supported_file(filename),
            size_valid: self.validate_file_size(size_bytes),
        })
    }

    /// Extract a stored upload. The file type is decided by `filename`,
    /// not by `path`.
    pub fn extract_file(&self, path: &Path, filename: &str) -> Result<ExtractionResult> {
        let file_type = self.check_type(filename)?;
        let size = std::fs::metadata(path)?.len();
        self.check_size(size)?;

        let bytes = std::fs::read(path)?;
        self.dispatch(file_type, &bytes)
    }

    /// Extract from in-memory bytes.
    pub fn extract_bytes(&self, bytes: &[u8], filename: &str) -> Result<ExtractionResult> {
        let file_type = self.check_type(filename)?;
        self.check_size(bytes.len() as u64)?;
        self.dispatch(file_type, bytes)
    }

    fn check_type(&self, filename: &str) -> Result<FileType> {
        let extension = file_extension(filename);
        FileType::from_extension(&extension).ok_or(Error::UnsupportedFileType(extension))
    }

    fn check_size(&self, size: u64) -> Result<()> {
        if self.validate_file_size(size) {
            Ok(())
        } else {
            Err(Error::FileTooLarge {
                size,
                limit: self.config.max_file_size,
            })
        }
    }

    fn dispatch(&self, file_type: FileType, bytes: &[u8]) -> Result<ExtractionResult> {
        log::info!("Extracting {:?} document ({} bytes)", file_type, bytes.len());
        match file_type {
            FileType::Pdf => pdf::extract_pdf(bytes),
            FileType::Docx => docx::extract_docx(bytes),
        }
    }
}
