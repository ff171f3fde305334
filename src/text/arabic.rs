//! Arabic script detection, digit transliteration and letter-form normalization.
//!
//! Detection uses the main Arabic block (U+0600..=U+06FF) only. Note that the
//! Arabic-Indic digits (U+0660..=U+0669) sit inside that block, so a token made
//! purely of Arabic-Indic digits counts as containing Arabic.

/// Arabic-Indic digits indexed by their ASCII value.
const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

/// Whether `c` lies in the main Arabic block.
#[inline]
pub fn is_arabic(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c)
}

/// Whether `text` contains at least one Arabic-block character.
pub fn contains_arabic(text: &str) -> bool {
    text.chars().any(is_arabic)
}

/// Whether `text` contains at least one ASCII digit.
pub fn contains_ascii_digit(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}

/// Replace every ASCII digit with its Arabic-Indic counterpart.
pub fn to_arabic_indic_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => ARABIC_INDIC_DIGITS[d as usize],
            _ => c,
        })
        .collect()
}

/// Unify Alif, Ya and Ta-Marbuta letter forms.
///
/// - إ أ آ ا → ا
/// - ى ي → ي
/// - ة ه → ة
///
/// The mapping is lossy and one-directional. The last rule rewrites every
/// standalone Ha as well, whatever its position in the word.
pub fn normalize_letters(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'إ' | 'أ' | 'آ' | 'ا' => 'ا',
            'ى' | 'ي' => 'ي',
            'ة' | 'ه' => 'ة',
            other => other,
        })
        .collect()
}
