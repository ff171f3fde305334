//! Citation reference detection and format checking.
//!
//! This module finds spans that look like citations (a parenthesized or
//! bracketed span containing a four-digit year) and flags those that do not
//! start with the canonical "(Author, Year)" form. The heuristic both over-
//! and under-matches real citations.

use super::{PassOutput, ProofreadingPass};
use crate::pipeline::suggestion::{Suggestion, SuggestionType};
use crate::rules::{CANONICAL_CITATION, CITATION_PATTERNS};

const CITATION_ADVICE: &str = "تأكد من تنسيق المرجع: (المؤلف، السنة)";
const CITATION_DESCRIPTION: &str = "تحسين تنسيق المراجع";

/// Citation delimiter style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CitationStyle {
    /// Citations like (Smith, 2020)
    Parenthesized,
    /// Citations like [Smith, 2020]
    Bracketed,
}

/// A detected citation in text.
#[derive(Debug, Clone)]
pub struct Citation {
    /// The citation text itself
    pub text: String,
    /// Starting byte position in text
    pub position: usize,
    /// Delimiter style
    pub style: CitationStyle,
    /// Whether the span starts with the canonical "(Author, Year)" form
    pub canonical: bool,
}

/// Detects citation-like spans.
#[derive(Debug, Clone, Default)]
pub struct CitationDetector;

impl CitationDetector {
    /// Create a new citation detector.
    pub fn new() -> Self {
        Self
    }

    /// Detect citations in text.
    ///
    /// All parenthesized matches come first, then all bracketed matches. The
    /// result is deliberately not sorted by position.
    pub fn detect_citations(&self, text: &str) -> Vec<Citation> {
        let styles = [CitationStyle::Parenthesized, CitationStyle::Bracketed];
        let mut citations = Vec::new();

        for (pattern, style) in CITATION_PATTERNS.iter().zip(styles) {
            for m in pattern.find_iter(text) {
                citations.push(Citation {
                    text: m.as_str().to_string(),
                    position: m.start(),
                    style,
                    canonical: CANONICAL_CITATION.is_match(m.as_str()),
                });
            }
        }

        citations
    }
}

/// Fifth pass: flag non-canonical citations. Never rewrites the text.
#[derive(Debug, Clone, Default)]
pub struct CitationPass {
    detector: CitationDetector,
}

impl CitationPass {
    /// Create a new citation pass.
    pub fn new() -> Self {
        Self::default()
    }

    /// One suggestion per non-canonical citation, in detection order.
    pub fn check(&self, text: &str) -> Vec<Suggestion> {
        self.detector
            .detect_citations(text)
            .into_iter()
            .filter(|c| !c.canonical)
            .map(|c| {
                Suggestion::new(
                    SuggestionType::Citation,
                    c.text,
                    CITATION_ADVICE,
                    CITATION_DESCRIPTION,
                )
            })
            .collect()
    }
}

impl ProofreadingPass for CitationPass {
    fn apply(&self, text: String) -> PassOutput {
        let suggestions = self.check(&text);
        PassOutput::unchanged(text, suggestions)
    }

    fn name(&self) -> &'static str {
        "citation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_citation_is_silent() {
        assert!(CitationPass::new().check("(Smith, 2020)").is_empty());
    }

    #[test]
    fn test_loose_citation_is_flagged() {
        let suggestions = CitationPass::new().check("(Smith 2020 page 5)");
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].original, "(Smith 2020 page 5)");
        assert_eq!(suggestions[0].kind, SuggestionType::Citation);
    }

    #[test]
    fn test_bracketed_is_never_canonical() {
        let citations = CitationDetector::new().detect_citations("كما ورد [Smith, 2020]");
        assert_eq!(citations.len(), 1);
        assert_eq!(citations[0].style, CitationStyle::Bracketed);
        assert!(!citations[0].canonical);
    }

    #[test]
    fn test_parenthesized_before_bracketed() {
        let citations = CitationDetector::new().detect_citations("[Lee 2019] ثم (Kim 2021)");
        assert_eq!(citations[0].style, CitationStyle::Parenthesized);
        assert_eq!(citations[1].style, CitationStyle::Bracketed);
        assert!(citations[0].position > citations[1].position);
    }

    #[test]
    fn test_no_year_no_citation() {
        assert!(CitationDetector::new().detect_citations("(انظر أعلاه)").is_empty());
    }
}
