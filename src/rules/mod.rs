//! Static rule tables consumed by the proofreading passes.
//!
//! Every table here is process-wide, read-only and initialized once. The
//! dictionary tables are ordered slices rather than hash maps: iteration order
//! decides suggestion order, and because substitutions are applied one key at
//! a time, a later key may match text produced by an earlier one.

pub mod dictionaries;
pub mod patterns;

pub use dictionaries::{ACADEMIC_PHRASES, ACADEMIC_TERMS, COMMON_ERRORS, CONJUNCTIONS};
pub use patterns::{
    PassiveRule, PunctuationRule, CANONICAL_CITATION, CITATION_PATTERNS, PASSIVE_RULES,
    PUNCTUATION_RULES, SENTENCE_DELIMITERS, WHITESPACE_RUN,
};

/// An ordered list of `(from, to)` substitution pairs.
pub type RuleTable = &'static [(&'static str, &'static str)];
