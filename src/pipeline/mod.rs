//! Proofreading pipeline with a fixed, ordered sequence of passes.
//!
//! ```text
//! Raw text
//!     ↓
//! [CleanPass] (whitespace, punctuation, numerals)
//!     ↓
//! [SpellingPass] (common-error dictionary)
//!     ↓
//! [StylePass] (academic phrases + voice + complexity)
//!     ↓
//! [TerminologyPass] (read-only)
//!     ↓
//! [CitationPass] (read-only)
//!     ↓
//! ProcessingResult
//! ```
//!
//! # Key Design Principles
//!
//! 1. **Sequential**: each pass consumes the previous pass's text. Passes are
//!    never reordered, skipped or run in parallel.
//!
//! 2. **Append-only suggestions**: a pass only adds suggestions; the global
//!    list reflects pass order, then detection order within a pass.
//!
//! 3. **Static rules**: all rule tables are read-only and shared, so one
//!    pipeline can serve concurrent callers.

pub mod passes;
pub mod result;
pub mod suggestion;

pub use passes::{default_passes, PassOutput, ProofreadingPass};
pub use result::{ProcessingResult, ProcessingStats};
pub use suggestion::{Suggestion, SuggestionType};

use crate::config::ProofreaderConfig;
use crate::error::{Error, Result};

/// The proofreading pipeline - orchestrates the full pass sequence.
pub struct ProofreadingPipeline {
    config: ProofreaderConfig,
    passes: Vec<Box<dyn ProofreadingPass>>,
}

impl ProofreadingPipeline {
    /// Create a new pipeline with default configuration.
    pub fn new() -> Self {
        Self::with_config(ProofreaderConfig::default())
    }

    /// Create a pipeline with custom configuration.
    pub fn with_config(config: ProofreaderConfig) -> Self {
        let passes = default_passes(&config);
        Self { config, passes }
    }

    /// Run every pass over `text`.
    ///
    /// Returns [`Error::EmptyInput`] when `text` is blank; any other input
    /// succeeds.
    pub fn process(&self, text: &str) -> Result<ProcessingResult> {
        if text.trim().is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut current = text.to_string();
        let mut suggestions = Vec::new();

        for pass in &self.passes {
            let output = pass.apply(current);
            log::debug!(
                "Pass '{}' emitted {} suggestion(s)",
                pass.name(),
                output.suggestions.len()
            );
            suggestions.extend(output.suggestions);
            current = output.text;
        }

        let stats = ProcessingStats::compute(text, &current, &suggestions);
        log::info!(
            "Proofread {} word(s): {} suggestion(s) across {} type(s)",
            stats.original_words,
            stats.suggestions_count,
            stats.improvement_types.len()
        );

        Ok(ProcessingResult {
            original_text: text.to_string(),
            processed_text: current,
            suggestions,
            stats,
        })
    }

    /// Names of the passes, in execution order.
    pub fn pass_names(&self) -> Vec<&'static str> {
        self.passes.iter().map(|p| p.name()).collect()
    }

    /// Get the current configuration.
    pub fn config(&self) -> &ProofreaderConfig {
        &self.config
    }
}

impl Default for ProofreadingPipeline {
    fn default() -> Self {
        Self::new()
    }
}
