//! Whitespace, punctuation and numeral cleanup.

use super::{PassOutput, ProofreadingPass};
use crate::pipeline::suggestion::{Suggestion, SuggestionType};
use crate::rules::{PUNCTUATION_RULES, WHITESPACE_RUN};
use crate::text::{contains_arabic, contains_ascii_digit, to_arabic_indic_digits};
use std::borrow::Cow;

const PUNCTUATION_DESCRIPTION: &str = "تصحيح علامات الترقيم";

/// First pass: collapse whitespace, fix punctuation, transliterate digits.
///
/// Every punctuation rule that changes the text emits one suggestion holding
/// the whole text before and after that rule. The numeral step is silent.
#[derive(Debug, Clone, Default)]
pub struct CleanPass;

impl CleanPass {
    /// Create a new clean pass.
    pub fn new() -> Self {
        Self
    }

    /// Apply only the punctuation rules, in order.
    pub fn fix_punctuation(&self, mut text: String) -> PassOutput {
        let mut suggestions = Vec::new();

        for rule in PUNCTUATION_RULES.iter() {
            let fixed = rule.pattern.replace_all(&text, rule.replacement).into_owned();
            if fixed != text {
                let before = std::mem::replace(&mut text, fixed);
                suggestions.push(Suggestion::new(
                    SuggestionType::Punctuation,
                    before,
                    text.clone(),
                    PUNCTUATION_DESCRIPTION,
                ));
            }
        }

        PassOutput { text, suggestions }
    }
}

impl ProofreadingPass for CleanPass {
    fn apply(&self, text: String) -> PassOutput {
        let collapsed = WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned();
        let PassOutput { text, suggestions } = self.fix_punctuation(collapsed);

        PassOutput {
            text: arabize_mixed_numerals(&text),
            suggestions,
        }
    }

    fn name(&self) -> &'static str {
        "clean"
    }
}

/// Convert ASCII digits to Arabic-Indic digits inside tokens that also contain
/// Arabic. Tokens are whitespace-delimited and rejoined with single spaces.
pub fn arabize_mixed_numerals(text: &str) -> String {
    text.split_whitespace()
        .map(|token| {
            if contains_ascii_digit(token) && contains_arabic(token) {
                Cow::Owned(to_arabic_indic_digits(token))
            } else {
                Cow::Borrowed(token)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
