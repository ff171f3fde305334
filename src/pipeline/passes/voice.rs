//! Passive-voice detection.

use crate::pipeline::suggestion::{Suggestion, SuggestionType};
use crate::rules::PASSIVE_RULES;

const VOICE_DESCRIPTION: &str = "اقتراح استخدام المبني للمعلوم بدلاً من المبني للمجهول";

/// Flags "تم / يتم / تمت + noun" constructions.
///
/// Every match is reported, without deduplication. Patterns are scanned one
/// after another, so all matches of the first pattern precede those of the
/// second. The patterns are not word-bounded: "يتم X" also contains "تم X".
#[derive(Debug, Clone, Default)]
pub struct VoiceCheck;

impl VoiceCheck {
    /// Create a new voice check.
    pub fn new() -> Self {
        Self
    }

    /// Scan `text` and return one suggestion per match.
    pub fn check(&self, text: &str) -> Vec<Suggestion> {
        let mut suggestions = Vec::new();

        for rule in PASSIVE_RULES.iter() {
            for m in rule.pattern.find_iter(text) {
                let rewrite = rule.pattern.replace_all(m.as_str(), rule.replacement);
                suggestions.push(Suggestion::new(
                    SuggestionType::Voice,
                    m.as_str(),
                    rewrite.into_owned(),
                    VOICE_DESCRIPTION,
                ));
            }
        }

        suggestions
    }
}
