//! Pipeline output and aggregate statistics.

use super::suggestion::{Suggestion, SuggestionType};
use crate::text::word_count;
use indexmap::IndexSet;
use serde::Serialize;

/// Aggregate statistics over one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessingStats {
    /// Whitespace-delimited tokens in the input
    pub original_words: usize,
    /// Whitespace-delimited tokens in the final text
    pub processed_words: usize,
    /// Total suggestions across all passes
    pub suggestions_count: usize,
    /// Distinct suggestion types, in order of first appearance
    pub improvement_types: IndexSet<SuggestionType>,
}

impl ProcessingStats {
    /// Compute statistics from the input, the final text and the suggestion list.
    pub fn compute(original: &str, processed: &str, suggestions: &[Suggestion]) -> Self {
        Self {
            original_words: word_count(original),
            processed_words: word_count(processed),
            suggestions_count: suggestions.len(),
            improvement_types: suggestions.iter().map(|s| s.kind).collect(),
        }
    }
}

/// The result of running the full pipeline on one text.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessingResult {
    /// Input exactly as given
    pub original_text: String,
    /// Text after all rewriting passes
    pub processed_text: String,
    /// Suggestions in detection order
    pub suggestions: Vec<Suggestion>,
    /// Aggregate statistics
    pub stats: ProcessingStats,
}

impl ProcessingResult {
    /// Suggestions of one type, in detection order.
    pub fn suggestions_of(&self, kind: SuggestionType) -> impl Iterator<Item = &Suggestion> {
        self.suggestions.iter().filter(move |s| s.kind == kind)
    }
}
