//! Script-level text helpers shared by the extractor and the pipeline.

pub mod arabic;

pub use arabic::{
    contains_arabic, contains_ascii_digit, is_arabic, normalize_letters, to_arabic_indic_digits,
};

/// Number of whitespace-delimited tokens in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Round to two decimal places, as reported in statistics.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
