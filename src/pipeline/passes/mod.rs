//! Proofreading passes.
//!
//! Each pass consumes the running text and returns the (possibly rewritten)
//! text together with the suggestions it detected, in detection order.
//!
//! # Pass Order
//!
//! 1. [`CleanPass`]: whitespace, punctuation, mixed-script numerals
//! 2. [`SpellingPass`]: common-error dictionary
//! 3. [`StylePass`]: academic phrases, plus [`VoiceCheck`] and [`ComplexityCheck`]
//! 4. [`TerminologyPass`]: read-only terminology scan
//! 5. [`CitationPass`]: read-only citation format scan

mod citation;
mod clean;
mod complexity;
mod spelling;
mod style;
mod terminology;
mod voice;

pub use citation::{Citation, CitationDetector, CitationPass, CitationStyle};
pub use clean::{arabize_mixed_numerals, CleanPass};
pub use complexity::ComplexityCheck;
pub use spelling::SpellingPass;
pub use style::StylePass;
pub use terminology::TerminologyPass;
pub use voice::VoiceCheck;

use super::suggestion::{Suggestion, SuggestionType};
use crate::config::ProofreaderConfig;
use crate::rules::RuleTable;

/// Text and suggestions produced by one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassOutput {
    /// Text handed to the next pass
    pub text: String,
    /// Suggestions in detection order
    pub suggestions: Vec<Suggestion>,
}

impl PassOutput {
    /// Output of a read-only pass: the input text plus the findings.
    pub fn unchanged(text: String, suggestions: Vec<Suggestion>) -> Self {
        Self { text, suggestions }
    }
}

/// One stage of the proofreading pipeline.
///
/// Implementations must be total: any string input yields an output, never a
/// panic. Passes hold only read-only state so a pipeline can be shared across
/// threads.
pub trait ProofreadingPass: Send + Sync {
    /// Run the pass over `text`.
    fn apply(&self, text: String) -> PassOutput;

    /// Return the name of this pass for logging.
    fn name(&self) -> &'static str;
}

/// Build the passes in their fixed order.
pub fn default_passes(config: &ProofreaderConfig) -> Vec<Box<dyn ProofreadingPass>> {
    vec![
        Box::new(CleanPass::new()),
        Box::new(SpellingPass::new()),
        Box::new(StylePass::new(ComplexityCheck::from_config(config))),
        Box::new(TerminologyPass::new()),
        Box::new(CitationPass::new()),
    ]
}

/// Replace every occurrence of each key in `table`, one key at a time.
///
/// Keys are visited in table order and each matching key yields exactly one
/// suggestion, however many times it occurred. A key may match text produced
/// by an earlier key's replacement.
pub(crate) fn substitute_all(
    mut text: String,
    table: RuleTable,
    kind: SuggestionType,
    describe: impl Fn(&str, &str) -> String,
) -> PassOutput {
    let mut suggestions = Vec::new();

    for &(from, to) in table {
        if text.contains(from) {
            text = text.replace(from, to);
            suggestions.push(Suggestion::new(kind, from, to, describe(from, to)));
        }
    }

    PassOutput { text, suggestions }
}
