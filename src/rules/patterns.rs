//! Compiled regular expressions for punctuation, voice and citation checks.

use lazy_static::lazy_static;
use regex::Regex;

/// A punctuation rewrite applied with `replace_all`.
pub struct PunctuationRule {
    /// Pattern to match
    pub pattern: Regex,
    /// Replacement template (`${n}` refers to capture groups)
    pub replacement: &'static str,
}

/// A passive-voice construction and the active-voice template proposed for it.
pub struct PassiveRule {
    /// Pattern with the verb noun in capture group 1
    pub pattern: Regex,
    /// Replacement template applied to the matched span
    pub replacement: &'static str,
}

lazy_static! {
    /// Any run of whitespace
    pub static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();

    /// Ordered punctuation rules. Each is applied to the output of the previous one.
    pub static ref PUNCTUATION_RULES: Vec<PunctuationRule> = vec![
        // Remove space before punctuation
        PunctuationRule {
            pattern: Regex::new(r"\s+([،؛؟!.])").unwrap(),
            replacement: "${1}",
        },
        // One space after punctuation
        PunctuationRule {
            pattern: Regex::new(r"([،؛؟!.])\s*([^\s])").unwrap(),
            replacement: "${1} ${2}",
        },
        PunctuationRule {
            pattern: Regex::new(r"\.{2,}").unwrap(),
            replacement: "...",
        },
        PunctuationRule {
            pattern: Regex::new(r"\?{2,}").unwrap(),
            replacement: "؟",
        },
        PunctuationRule {
            pattern: Regex::new(r"!{2,}").unwrap(),
            replacement: "!",
        },
    ];

    /// Passive constructions, scanned in this order.
    ///
    /// The captured word stops at combining marks (harakat), like `\w` in
    /// most non-Rust regex engines.
    pub static ref PASSIVE_RULES: Vec<PassiveRule> = vec![
        PassiveRule {
            pattern: Regex::new(r"تم\s+([\p{L}\p{N}_]+)").unwrap(),
            replacement: "قام الباحث بـ${1}",
        },
        PassiveRule {
            pattern: Regex::new(r"يتم\s+([\p{L}\p{N}_]+)").unwrap(),
            replacement: "يقوم الباحث بـ${1}",
        },
        PassiveRule {
            pattern: Regex::new(r"تمت\s+([\p{L}\p{N}_]+)").unwrap(),
            replacement: "قامت الدراسة بـ${1}",
        },
    ];

    /// Sentence boundaries for the complexity check
    pub static ref SENTENCE_DELIMITERS: Regex = Regex::new(r"[.؟!]").unwrap();

    /// Spans that look like citations: parenthesized or bracketed with a 4-digit year
    pub static ref CITATION_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"\([^)]*\d{4}[^)]*\)").unwrap(),
        Regex::new(r"\[[^\]]*\d{4}[^\]]*\]").unwrap(),
    ];

    /// Canonical "(Author, Year)" form, anchored at the start only
    pub static ref CANONICAL_CITATION: Regex = Regex::new(r"^\([^,]+,\s*\d{4}\)").unwrap();
}
