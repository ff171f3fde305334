//! Substitution dictionaries.

use super::RuleTable;

/// Dialectal forms and common misspellings mapped to their standard form.
pub static COMMON_ERRORS: RuleTable = &[
    // Common spelling mistakes
    ("كتير", "كثير"),
    ("شوي", "قليل"),
    ("هيك", "هكذا"),
    ("بس", "لكن"),
    ("عشان", "لأن"),
    ("لانه", "لأنه"),
    ("لانها", "لأنها"),
    ("مش", "ليس"),
    ("ماشي", "موافق"),
    ("اكتر", "أكثر"),
    ("اقل", "أقل"),
    ("احسن", "أحسن"),
    ("اسوأ", "أسوأ"),
    // Colloquial words with an academic equivalent
    ("يعني", "أي"),
    ("زي", "مثل"),
    ("علشان", "لأجل"),
    ("خالص", "تماماً"),
    ("كده", "هكذا"),
    ("ده", "هذا"),
    ("دي", "هذه"),
    ("دول", "هؤلاء"),
];

/// Informal phrases mapped to formal academic phrasing.
pub static ACADEMIC_PHRASES: RuleTable = &[
    ("في النهاية", "في الختام"),
    ("بصراحة", "في الواقع"),
    ("الحقيقة", "في الحقيقة"),
    ("يا ترى", "من المحتمل"),
    ("ممكن", "من الممكن"),
    ("لازم", "يجب"),
    ("مفروض", "من المفترض"),
];

/// Everyday terms with a preferred academic term. Suggested only, never applied.
pub static ACADEMIC_TERMS: RuleTable = &[
    ("بحث", "دراسة"),
    ("شغل", "عمل"),
    ("حاجة", "أمر"),
    ("موضوع", "قضية"),
    ("مشكلة", "إشكالية"),
    ("فكرة", "مفهوم"),
    ("رأي", "وجهة نظر"),
    ("كلام", "قول"),
];

/// Connectors counted by the sentence-complexity check.
///
/// Counted as raw substrings, so the single-letter "و" also matches inside words.
pub static CONJUNCTIONS: &[&str] = &["و", "أو", "لكن", "غير أن", "إلا أن", "بينما"];
