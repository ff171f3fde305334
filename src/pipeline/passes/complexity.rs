//! Sentence length and connector density check.

use crate::config::ProofreaderConfig;
use crate::pipeline::suggestion::{Suggestion, SuggestionType};
use crate::rules::{CONJUNCTIONS, SENTENCE_DELIMITERS};
use crate::text::word_count;

const SPLIT_ADVICE: &str = "فكر في تقسيم هذه الجملة إلى جملتين أقصر";
const SIMPLIFY_ADVICE: &str = "فكر في تبسيط الجملة وتقليل أدوات الربط";
const CONNECTORS_DESCRIPTION: &str = "الجملة تحتوي على أدوات ربط كثيرة";

/// Flags sentences that are too long or use too many connectors.
///
/// Sentences are split on `.`, `؟` and `!`. A sentence can trigger both
/// suggestions; the length suggestion comes first.
#[derive(Debug, Clone)]
pub struct ComplexityCheck {
    max_words: usize,
    max_conjunctions: usize,
}

impl Default for ComplexityCheck {
    fn default() -> Self {
        Self::from_config(&ProofreaderConfig::default())
    }
}

impl ComplexityCheck {
    /// Create a check with explicit thresholds (strictly-greater comparison).
    pub fn new(max_words: usize, max_conjunctions: usize) -> Self {
        Self {
            max_words,
            max_conjunctions,
        }
    }

    /// Create a check from configuration.
    pub fn from_config(config: &ProofreaderConfig) -> Self {
        Self::new(config.long_sentence_words, config.max_conjunctions)
    }

    /// Scan `text` sentence by sentence.
    pub fn check(&self, text: &str) -> Vec<Suggestion> {
        let mut suggestions = Vec::new();

        for sentence in SENTENCE_DELIMITERS.split(text) {
            let sentence = sentence.trim();
            if sentence.is_empty() {
                continue;
            }

            let words = word_count(sentence);
            if words > self.max_words {
                suggestions.push(Suggestion::new(
                    SuggestionType::Complexity,
                    sentence,
                    SPLIT_ADVICE,
                    format!("الجملة طويلة ({} كلمة) - يُنصح بتقسيمها", words),
                ));
            }

            if count_conjunctions(sentence) > self.max_conjunctions {
                suggestions.push(Suggestion::new(
                    SuggestionType::Complexity,
                    sentence,
                    SIMPLIFY_ADVICE,
                    CONNECTORS_DESCRIPTION,
                ));
            }
        }

        suggestions
    }
}

/// Total non-overlapping substring occurrences of every connector.
pub(crate) fn count_conjunctions(sentence: &str) -> usize {
    CONJUNCTIONS
        .iter()
        .map(|conj| sentence.matches(conj).count())
        .sum()
}
