//! Suggestion records emitted by the proofreading passes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a suggestion. Serialized in lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionType {
    /// Punctuation spacing and repetition fixes
    Punctuation,
    /// Dictionary spelling corrections
    Spelling,
    /// Informal-to-formal phrase replacements
    Style,
    /// Passive constructions with an active-voice alternative
    Voice,
    /// Over-long or connector-heavy sentences
    Complexity,
    /// Everyday terms with a preferred academic term
    Terminology,
    /// Citation spans not in "(Author, Year)" form
    Citation,
}

impl SuggestionType {
    /// The wire name of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Punctuation => "punctuation",
            Self::Spelling => "spelling",
            Self::Style => "style",
            Self::Voice => "voice",
            Self::Complexity => "complexity",
            Self::Terminology => "terminology",
            Self::Citation => "citation",
        }
    }
}

impl fmt::Display for SuggestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A detected issue and its proposed fix.
///
/// A suggestion records what a pass found; whether the fix was applied to the
/// running text depends on the pass (terminology and citation checks never
/// rewrite).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Category
    #[serde(rename = "type")]
    pub kind: SuggestionType,
    /// Text the suggestion refers to
    pub original: String,
    /// Proposed replacement or advice
    pub suggestion: String,
    /// Arabic explanation for the user
    pub description: String,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new(
        kind: SuggestionType,
        original: impl Into<String>,
        suggestion: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            original: original.into(),
            suggestion: suggestion.into(),
            description: description.into(),
        }
    }
}
