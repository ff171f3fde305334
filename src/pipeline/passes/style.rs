//! Academic style improvement.

use super::{substitute_all, ComplexityCheck, PassOutput, ProofreadingPass, VoiceCheck};
use crate::pipeline::suggestion::SuggestionType;
use crate::rules::ACADEMIC_PHRASES;

/// Third pass: formal phrasing, then passive-voice and complexity checks.
///
/// Only the phrase substitution rewrites the text; both checks read the
/// rewritten text and add suggestions after the phrase suggestions.
#[derive(Debug, Clone, Default)]
pub struct StylePass {
    voice: VoiceCheck,
    complexity: ComplexityCheck,
}

impl StylePass {
    /// Create a style pass with the given complexity thresholds.
    pub fn new(complexity: ComplexityCheck) -> Self {
        Self {
            voice: VoiceCheck::new(),
            complexity,
        }
    }
}

impl ProofreadingPass for StylePass {
    fn apply(&self, text: String) -> PassOutput {
        let mut output = substitute_all(text, ACADEMIC_PHRASES, SuggestionType::Style, |from, to| {
            format!("تحسين الأسلوب الأكاديمي: \"{}\" إلى \"{}\"", from, to)
        });

        output.suggestions.extend(self.voice.check(&output.text));
        output.suggestions.extend(self.complexity.check(&output.text));
        output
    }

    fn name(&self) -> &'static str {
        "style"
    }
}
