//! Cleanup of raw extracted text.
//!
//! Document readers emit text with layout artifacts: runs of blank lines,
//! tab-separated columns, page numbers on their own line, and glyphs from
//! symbol fonts. This module normalizes that text before it is returned.

use crate::text::normalize_letters;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Blank-line runs (possibly containing spaces) between two newlines
    static ref RE_BLANK_LINES: Regex = Regex::new(r"\n\s*\n").unwrap();

    /// Runs of spaces and tabs
    static ref RE_HORIZONTAL_SPACE: Regex = Regex::new(r"[ \t]+").unwrap();

    /// A number alone on its own line (likely a page number)
    static ref RE_STANDALONE_NUM: Regex = Regex::new(r"\n\d+\n").unwrap();

    /// A number on its own line at the end of a line run
    static ref RE_TRAILING_NUM: Regex = Regex::new(r"(?m)\n\d+\s*$").unwrap();

    /// Everything outside word characters, whitespace, the Arabic blocks and basic punctuation
    static ref RE_DISALLOWED: Regex = Regex::new(
        r#"[^\w\s\x{0600}-\x{06FF}\x{0750}-\x{077F}\x{08A0}-\x{08FF}\x{FB50}-\x{FDFF}\x{FE70}-\x{FEFF}.,;:!?()\[\]{}"'\-]"#
    )
    .unwrap();
}

/// Clean and normalize extracted text.
///
/// Steps, in order:
/// 1. Collapse blank-line runs to exactly one blank line
/// 2. Collapse spaces and tabs to one space
/// 3. Drop standalone numeric lines
/// 4. Drop characters outside the allow-set
/// 5. Unify Arabic letter forms (see [`normalize_letters`])
/// 6. Trim
///
/// # Examples
///
/// ```ignore
/// use arabic_proofreader::extraction::cleanup::clean_extracted_text;
///
/// let output = clean_extracted_text("Line 1\n\n\n\nLine 2\n7\n");
/// assert_eq!(output, "Line 1\n\nLine 2");
/// ```
pub fn clean_extracted_text(text: &str) -> String {
    let text = RE_BLANK_LINES.replace_all(text, "\n\n");
    let text = RE_HORIZONTAL_SPACE.replace_all(&text, " ");

    let text = RE_STANDALONE_NUM.replace_all(&text, "\n");
    let text = RE_TRAILING_NUM.replace_all(&text, "");

    let text = RE_DISALLOWED.replace_all(&text, "");

    normalize_letters(&text).trim().to_string()
}
