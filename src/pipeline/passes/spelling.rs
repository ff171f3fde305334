//! Dictionary spelling correction.

use super::{substitute_all, PassOutput, ProofreadingPass};
use crate::pipeline::suggestion::SuggestionType;
use crate::rules::COMMON_ERRORS;

/// Second pass: replace common misspellings and dialect forms.
#[derive(Debug, Clone, Default)]
pub struct SpellingPass;

impl SpellingPass {
    /// Create a new spelling pass.
    pub fn new() -> Self {
        Self
    }
}

impl ProofreadingPass for SpellingPass {
    fn apply(&self, text: String) -> PassOutput {
        substitute_all(text, COMMON_ERRORS, SuggestionType::Spelling, |from, to| {
            format!("تصحيح إملائي: \"{}\" إلى \"{}\"", from, to)
        })
    }

    fn name(&self) -> &'static str {
        "spelling"
    }
}
