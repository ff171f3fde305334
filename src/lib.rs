// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::should_implement_trait)]
#![allow(clippy::new_without_default)]

//! # Arabic Proofreader
//!
//! Rule-based proofreading for Arabic academic writing.
//!
//! ## Core Features
//!
//! - **Extraction**: text, metadata and statistics from PDF and Word uploads,
//!   with layout cleanup and Arabic letter normalization
//! - **Proofreading Pipeline**: an ordered sequence of passes (cleanup,
//!   spelling, academic style, passive voice, sentence complexity,
//!   terminology, citations) that rewrite the text and emit suggestions
//! - **Analysis**: word, sentence and script counts with a readability verdict
//! - **Service Layer**: upload, proofread, analyze and health handlers that
//!   return JSON bodies with HTTP status codes
//!
//! ## Quick Start
//!
//! ```ignore
//! use arabic_proofreader::ProofreadingPipeline;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pipeline = ProofreadingPipeline::new();
//! let result = pipeline.process("هذا  النص  كتير  حلو.")?;
//!
//! assert_eq!(result.processed_text, "هذا النص كثير حلو.");
//! for suggestion in &result.suggestions {
//!     println!("[{}] {}", suggestion.kind, suggestion.description);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Extracting a Document
//!
//! ```ignore
//! use arabic_proofreader::FileExtractor;
//!
//! let extractor = FileExtractor::new();
//! let bytes = std::fs::read("thesis.docx")?;
//! let extraction = extractor.extract_bytes(&bytes, "thesis.docx")?;
//! println!("{} words", extraction.stats.total_words);
//! ```

pub mod analysis;
pub mod api;
pub mod config;
pub mod error;
pub mod extraction;
pub mod pipeline;
pub mod rules;
pub mod text;

pub use analysis::{Readability, ReadabilityLevel, TextAnalysis};
pub use config::ProofreaderConfig;
pub use error::{Error, Result};
pub use extraction::{ExtractionResult, FileExtractor, FileType};
pub use pipeline::{
    ProcessingResult, ProcessingStats, ProofreadingPipeline, Suggestion, SuggestionType,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "arabic_proofreader");
    }
}
