//! Descriptive text statistics and a coarse readability verdict.

use crate::text::{is_arabic, round2, word_count};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    /// One letter (general category L). Combining marks such as harakat are not letters.
    static ref RE_LETTER: Regex = Regex::new(r"\p{L}").unwrap();

    /// One decimal digit (general category Nd), any script
    static ref RE_DIGIT: Regex = Regex::new(r"\p{Nd}").unwrap();
}

/// Readability bucket by average sentence length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadabilityLevel {
    /// Fewer than 15 words per sentence
    Simple,
    /// 15 to just under 25 words per sentence
    Medium,
    /// 25 or more words per sentence
    Complex,
}

impl ReadabilityLevel {
    /// Classify an average words-per-sentence value.
    pub fn from_avg_words(avg_words_per_sentence: f64) -> Self {
        if avg_words_per_sentence < 15.0 {
            Self::Simple
        } else if avg_words_per_sentence < 25.0 {
            Self::Medium
        } else {
            Self::Complex
        }
    }

    /// Arabic label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Simple => "بسيط",
            Self::Medium => "متوسط",
            Self::Complex => "معقد",
        }
    }
}

/// Readability verdict with advice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Readability {
    /// Bucket
    pub complexity: ReadabilityLevel,
    /// Arabic label of the bucket
    pub label: &'static str,
    /// Arabic recommendation
    pub recommendation: &'static str,
}

impl Readability {
    /// Build the verdict for an average words-per-sentence value.
    ///
    /// The recommendation bands are inclusive at both 15 and 25, so a text at
    /// exactly 25 is "complex" yet still "suitable".
    pub fn from_avg_words(avg: f64) -> Self {
        let complexity = ReadabilityLevel::from_avg_words(avg);
        let recommendation = if (15.0..=25.0).contains(&avg) {
            "النص مناسب للقراءة الأكاديمية"
        } else if avg > 25.0 {
            "يُنصح بتبسيط الجمل"
        } else {
            "يمكن تطوير تعقيد الجمل"
        };

        Self {
            complexity,
            label: complexity.label(),
            recommendation,
        }
    }
}

/// Counts and averages over a text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextAnalysis {
    /// Whitespace-delimited tokens
    pub word_count: usize,
    /// Unicode scalar values
    pub character_count: usize,
    /// Non-blank segments between `.`
    pub sentence_count: usize,
    /// Non-blank segments between blank lines
    pub paragraph_count: usize,
    /// Characters in the main Arabic block
    pub arabic_characters: usize,
    /// Letters outside the Arabic block
    pub english_characters: usize,
    /// Decimal digits (any script)
    pub numbers: usize,
    /// Words per sentence, two decimals
    pub avg_words_per_sentence: f64,
    /// Letters per word, two decimals
    pub avg_chars_per_word: f64,
    /// Readability verdict
    pub readability: Readability,
}

impl TextAnalysis {
    /// Analyze `text`.
    pub fn analyze(text: &str) -> Self {
        let words = word_count(text);
        let sentences = text.split('.').filter(|s| !s.trim().is_empty()).count();
        let paragraphs = text.split("\n\n").filter(|p| !p.trim().is_empty()).count();

        let characters = text.chars().count();
        let arabic = text.chars().filter(|&c| is_arabic(c)).count();
        let numbers = RE_DIGIT.find_iter(text).count();

        let mut alphabetic = 0;
        let mut english = 0;
        for letter in RE_LETTER.find_iter(text) {
            alphabetic += 1;
            if !letter.as_str().chars().all(is_arabic) {
                english += 1;
            }
        }

        let avg_words = words as f64 / sentences.max(1) as f64;
        let avg_chars = alphabetic as f64 / words.max(1) as f64;

        Self {
            word_count: words,
            character_count: characters,
            sentence_count: sentences,
            paragraph_count: paragraphs,
            arabic_characters: arabic,
            english_characters: english,
            numbers,
            avg_words_per_sentence: round2(avg_words),
            avg_chars_per_word: round2(avg_chars),
            readability: Readability::from_avg_words(avg_words),
        }
    }
}
