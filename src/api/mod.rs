//! Request/response layer for the proofreader service.
//!
//! Each endpoint is a method on [`ProofreaderService`] that takes the decoded
//! request and returns an [`ApiResponse`] (status code plus JSON body), so any
//! HTTP transport can mount them:
//!
//! | Route             | Method                          |
//! |-------------------|---------------------------------|
//! | `POST /upload`    | [`ProofreaderService::upload`]    |
//! | `POST /proofread` | [`ProofreaderService::proofread`] |
//! | `POST /analyze`   | [`ProofreaderService::analyze`]   |
//! | `GET /health`     | [`ProofreaderService::health`]    |
//!
//! ## Quick Start
//!
//! ```ignore
//! use arabic_proofreader::api::ProofreaderService;
//! use serde_json::json;
//!
//! let service = ProofreaderService::new();
//! let response = service.proofread(&json!({ "text": "هذا النص كتير حلو." }));
//! assert_eq!(response.status, 200);
//! ```

use crate::analysis::TextAnalysis;
use crate::config::ProofreaderConfig;
use crate::error::{Error, Result};
use crate::extraction::{file_extension, FileExtractor};
use crate::pipeline::ProofreadingPipeline;
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "Arabic Proofreader API";

/// API version reported by the health endpoint.
pub const API_VERSION: &str = "2.0.0";

/// Capabilities reported by the health endpoint.
pub const FEATURES: &[&str] = &[
    "file_extraction",
    "text_processing",
    "academic_style_improvement",
    "spelling_correction",
    "text_analysis",
];

const MSG_NO_FILE: &str = "لم يتم اختيار ملف";
const MSG_TEXT_REQUIRED: &str = "النص مطلوب";

/// HTTP-shaped response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// JSON body
    pub body: Value,
}

impl ApiResponse {
    /// 200 with `body`.
    pub fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    /// Error response with `{"error": message}`.
    pub fn error(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            body: json!({ "error": message.into() }),
        }
    }

    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Error response for an extraction failure, carrying its machine code.
    fn extraction_error(status: u16, err: &Error) -> Self {
        Self {
            status,
            body: json!({
                "error": err.localized_message(),
                "error_type": err.error_type(),
            }),
        }
    }
}

/// Holds the extractor and pipeline shared by all requests.
pub struct ProofreaderService {
    extractor: FileExtractor,
    pipeline: ProofreadingPipeline,
    upload_dir: PathBuf,
}

impl ProofreaderService {
    /// Create a service with default configuration.
    pub fn new() -> Self {
        Self::with_config(ProofreaderConfig::default())
    }

    /// Create a service with custom configuration.
    pub fn with_config(config: ProofreaderConfig) -> Self {
        Self {
            extractor: FileExtractor::with_config(config.clone()),
            pipeline: ProofreadingPipeline::with_config(config),
            upload_dir: std::env::temp_dir(),
        }
    }

    /// Stage uploads under `dir` instead of the system temp directory.
    pub fn with_upload_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.upload_dir = dir.into();
        self
    }

    /// Directory where uploads are staged while they are extracted.
    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    /// `POST /upload`: store, validate and extract an uploaded document.
    ///
    /// The upload lives in a named temporary file for the duration of the
    /// call and is removed on every return path.
    pub fn upload(&self, bytes: &[u8], filename: &str) -> ApiResponse {
        let filename = sanitize_filename(filename);
        if filename.is_empty() {
            return ApiResponse::error(400, MSG_NO_FILE);
        }

        match self.store_and_extract(bytes, &filename) {
            Ok(response) => response,
            Err(e) => {
                log::error!("Upload of '{}' failed: {}", filename, e);
                ApiResponse::error(500, Error::Processing(e.to_string()).localized_message())
            },
        }
    }

    fn store_and_extract(&self, bytes: &[u8], filename: &str) -> Result<ApiResponse> {
        let mut temp = tempfile::Builder::new()
            .prefix("upload_")
            .suffix(&file_extension(filename))
            .tempfile_in(&self.upload_dir)?;
        temp.write_all(bytes)?;
        temp.flush()?;

        let info = self.extractor.file_info(temp.path(), filename)?;
        if !info.is_supported {
            let err = Error::UnsupportedFileType(info.extension.clone());
            return Ok(ApiResponse::extraction_error(400, &err));
        }
        if !info.size_valid {
            let err = Error::FileTooLarge {
                size: info.size_bytes,
                limit: self.pipeline.config().max_file_size,
            };
            return Ok(ApiResponse::extraction_error(400, &err));
        }

        let extraction = match self.extractor.extract_file(temp.path(), filename) {
            Ok(extraction) => extraction,
            Err(e) => {
                log::warn!("Extraction of '{}' failed: {}", filename, e);
                return Ok(ApiResponse::extraction_error(500, &e));
            },
        };

        let mut metadata = to_object(&info)?;
        metadata.extend(to_object(&extraction.metadata)?);

        Ok(ApiResponse::ok(json!({
            "success": true,
            "text": extraction.text,
            "metadata": metadata,
            "stats": extraction.stats,
        })))
    }

    /// `POST /proofread`: run the pipeline over `{"text": ...}`.
    pub fn proofread(&self, request: &Value) -> ApiResponse {
        let text = match required_text(request) {
            Ok(text) => text,
            Err(response) => return response,
        };

        match self.pipeline.process(text) {
            Ok(result) => ApiResponse::ok(json!({
                "success": true,
                "original_text": result.original_text,
                "corrected_text": result.processed_text,
                "suggestions": result.suggestions,
                "stats": result.stats,
            })),
            Err(e) => ApiResponse::error(500, format!("خطأ في التدقيق: {}", e)),
        }
    }

    /// `POST /analyze`: descriptive statistics for `{"text": ...}`.
    pub fn analyze(&self, request: &Value) -> ApiResponse {
        let text = match required_text(request) {
            Ok(text) => text,
            Err(response) => return response,
        };

        match serde_json::to_value(TextAnalysis::analyze(text)) {
            Ok(analysis) => ApiResponse::ok(json!({ "success": true, "analysis": analysis })),
            Err(e) => ApiResponse::error(500, format!("خطأ في التحليل: {}", e)),
        }
    }

    /// `GET /health`: static capability descriptor.
    pub fn health(&self) -> ApiResponse {
        ApiResponse::ok(json!({
            "status": "healthy",
            "service": SERVICE_NAME,
            "version": API_VERSION,
            "features": FEATURES,
        }))
    }
}

impl Default for ProofreaderService {
    fn default() -> Self {
        Self::new()
    }
}

/// Keep only the final path component of a client-supplied filename.
pub fn sanitize_filename(filename: &str) -> String {
    filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

/// Pull a non-blank `text` string out of a request body.
fn required_text(request: &Value) -> std::result::Result<&str, ApiResponse> {
    let text = request
        .get("text")
        .and_then(Value::as_str)
        .ok_or_else(|| ApiResponse::error(400, MSG_TEXT_REQUIRED))?;
    if text.trim().is_empty() {
        return Err(ApiResponse::error(400, Error::EmptyInput.localized_message()));
    }
    Ok(text)
}

fn to_object<T: Serialize>(value: &T) -> Result<Map<String, Value>> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(Error::Processing(format!("expected a JSON object, got {}", other))),
        Err(e) => Err(Error::Processing(e.to_string())),
    }
}
