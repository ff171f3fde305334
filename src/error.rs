//! Error types for the proofreader.
//!
//! This module defines all error types that can occur during document
//! extraction and text processing. Every variant carries a stable
//! machine-readable code (see [`Error::error_type`]) and an Arabic
//! human-readable message (see [`Error::localized_message`]).

/// Result type alias for proofreader operations.
pub type Result<T> = std::result::Result<T, Error>;

const MIB: u64 = 1024 * 1024;

/// Error types that can occur during extraction and proofreading.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File extension is not in the supported set
    #[error("Unsupported file type: '{0}'")]
    UnsupportedFileType(String),

    /// File exceeds the configured size limit
    #[error("File too large: {size} bytes (limit {limit} bytes)")]
    FileTooLarge {
        /// Actual size in bytes
        size: u64,
        /// Configured limit in bytes
        limit: u64,
    },

    /// PDF could not be parsed
    #[error("PDF extraction failed: {0}")]
    PdfExtraction(String),

    /// DOCX could not be parsed
    #[error("DOCX extraction failed: {0}")]
    DocxExtraction(String),

    /// Text was empty after trimming
    #[error("Input text is empty")]
    EmptyInput,

    /// Catch-all for failures outside the defined kinds
    #[error("Processing error: {0}")]
    Processing(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Machine-checkable error code.
    pub fn error_type(&self) -> &'static str {
        match self {
            Error::UnsupportedFileType(_) => "unsupported_file_type",
            Error::FileTooLarge { .. } => "file_too_large",
            Error::PdfExtraction(_) => "pdf_extraction_error",
            Error::DocxExtraction(_) => "docx_extraction_error",
            Error::EmptyInput => "empty_input",
            Error::Processing(_) | Error::Io(_) => "generic_processing_error",
        }
    }

    /// Human-readable message in Arabic, suitable for end users.
    pub fn localized_message(&self) -> String {
        match self {
            Error::UnsupportedFileType(_) => {
                "نوع الملف غير مدعوم. يرجى رفع ملف PDF أو Word".to_string()
            },
            Error::FileTooLarge { limit, .. } if *limit > 0 && limit % MIB == 0 => {
                format!("حجم الملف كبير جداً. الحد الأقصى {} ميجابايت", limit / MIB)
            },
            // Limits that are not whole MiB would truncate, so show bytes
            Error::FileTooLarge { limit, .. } => {
                format!("حجم الملف كبير جداً. الحد الأقصى {} بايت", limit)
            },
            Error::PdfExtraction(reason) => format!("خطأ في قراءة ملف PDF: {}", reason),
            Error::DocxExtraction(reason) => format!("خطأ في قراءة ملف Word: {}", reason),
            Error::EmptyInput => "النص فارغ".to_string(),
            Error::Processing(reason) => format!("خطأ في معالجة الملف: {}", reason),
            Error::Io(e) => format!("خطأ في معالجة الملف: {}", e),
        }
    }
}
