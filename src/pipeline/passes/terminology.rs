//! Academic terminology suggestions.

use super::{PassOutput, ProofreadingPass};
use crate::pipeline::suggestion::{Suggestion, SuggestionType};
use crate::rules::ACADEMIC_TERMS;

/// Fourth pass: suggest academic terms. Never rewrites the text.
#[derive(Debug, Clone, Default)]
pub struct TerminologyPass;

impl TerminologyPass {
    /// Create a new terminology pass.
    pub fn new() -> Self {
        Self
    }

    /// One suggestion per term present in `text`, in table order.
    pub fn check(&self, text: &str) -> Vec<Suggestion> {
        ACADEMIC_TERMS
            .iter()
            .filter(|(informal, _)| text.contains(informal))
            .map(|&(informal, formal)| {
                Suggestion::new(
                    SuggestionType::Terminology,
                    informal,
                    formal,
                    format!("استخدام مصطلح أكاديمي: \"{}\" بدلاً من \"{}\"", formal, informal),
                )
            })
            .collect()
    }
}

impl ProofreadingPass for TerminologyPass {
    fn apply(&self, text: String) -> PassOutput {
        let suggestions = self.check(&text);
        PassOutput::unchanged(text, suggestions)
    }

    fn name(&self) -> &'static str {
        "terminology"
    }
}
