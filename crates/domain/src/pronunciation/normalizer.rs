//! Arabic orthographic normalization
//!
//! Learners and speech-to-text engines disagree on vowel marks, elongation and
//! several letter variants. Folding them away before comparison keeps the
//! score about pronunciation rather than spelling.

/// Tatweel (kashida), the elongation stroke
const TATWEEL: char = '\u{0640}';

/// Teh marbuta folds to a Latin placeholder, not to heh
const TEH_MARBUTA_PLACEHOLDER: char = 'h';

/// Alef maksura folds to a Latin placeholder, not to yeh
const ALEF_MAKSURA_PLACEHOLDER: char = 'y';

/// Whether `c` is one of the harakat/tashkeel marks (U+064B..=U+065F)
#[must_use]
pub const fn is_tashkeel(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{065F}')
}

/// Normalize Arabic text for pronunciation comparison
///
/// Applied in order:
/// 1. remove tashkeel (U+064B..=U+065F) and tatweel (U+0640)
/// 2. fold أ إ آ to bare alef ا
/// 3. fold teh marbuta ة to `h`
/// 4. fold alef maksura ى to `y`
/// 5. trim surrounding whitespace
///
/// The function is total and idempotent.
///
/// # Examples
///
/// ```
/// use domain::pronunciation::normalize_arabic;
///
/// assert_eq!(normalize_arabic("مَرْحَبًا"), "مرحبا");
/// assert_eq!(normalize_arabic("  أهلاً "), "اهلا");
/// assert_eq!(normalize_arabic("مدرسة"), "مدرسh");
/// assert_eq!(normalize_arabic(""), "");
/// ```
#[must_use]
pub fn normalize_arabic(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let folded: String = text
        .chars()
        .filter(|&c| !is_tashkeel(c) && c != TATWEEL)
        .map(fold_letter)
        .collect();

    folded.trim_matches(is_strippable_whitespace).to_string()
}

const fn fold_letter(c: char) -> char {
    match c {
        '\u{0623}' | '\u{0625}' | '\u{0622}' => '\u{0627}',
        '\u{0629}' => TEH_MARBUTA_PLACEHOLDER,
        '\u{0649}' => ALEF_MAKSURA_PLACEHOLDER,
        other => other,
    }
}

// Unicode whitespace plus the ASCII information separators U+001C..=U+001F
fn is_strippable_whitespace(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1C}'..='\u{1F}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(normalize_arabic(""), "");
    }

    #[test]
    fn removes_tanween_and_short_vowels() {
        assert_eq!(normalize_arabic("مَرْحَبًا"), "مرحبا");
        assert_eq!(normalize_arabic("شُكْرًا"), "شكرا");
    }

    #[test]
    fn removes_shadda_and_sukun() {
        assert_eq!(normalize_arabic("مُدَرِّسٌ"), "مدرس");
    }

    #[test]
    fn removes_tatweel() {
        assert_eq!(normalize_arabic("مـــرحبا"), "مرحبا");
    }

    #[test]
    fn folds_hamza_and_madda_alef_forms() {
        assert_eq!(normalize_arabic("أنا"), "انا");
        assert_eq!(normalize_arabic("إسلام"), "اسلام");
        assert_eq!(normalize_arabic("آمن"), "امن");
    }

    #[test]
    fn folds_teh_marbuta_to_placeholder() {
        assert_eq!(normalize_arabic("مدرسة"), "مدرسh");
    }

    #[test]
    fn folds_alef_maksura_to_placeholder() {
        assert_eq!(normalize_arabic("مستشفى"), "مستشفy");
    }

    #[test]
    fn leaves_heh_and_yeh_untouched() {
        assert_eq!(normalize_arabic("مدرسه"), "مدرسه");
        assert_eq!(normalize_arabic("في"), "في");
    }

    #[test]
    fn diacritic_removal_precedes_folding() {
        // hamza above (U+0654) is itself a tashkeel mark and is dropped
        assert_eq!(normalize_arabic("ا\u{0654}"), "ا");
        assert_eq!(normalize_arabic("\u{0623}\u{064E}"), "ا");
    }

    #[test]
    fn trims_surrounding_whitespace_only() {
        assert_eq!(normalize_arabic("  مرحبا بالعالم \n"), "مرحبا بالعالم");
    }

    #[test]
    fn whitespace_exposed_by_mark_removal_is_trimmed() {
        assert_eq!(normalize_arabic(" \u{064B}"), "");
        assert_eq!(normalize_arabic("مرحبا \u{0651}"), "مرحبا");
    }

    #[test]
    fn trims_information_separators() {
        assert_eq!(normalize_arabic("\u{1F}شكرا\u{1C}"), "شكرا");
    }

    #[test]
    fn non_arabic_text_passes_through() {
        assert_eq!(normalize_arabic("hello"), "hello");
    }

    #[test]
    fn is_idempotent_on_samples() {
        for sample in ["مَرْحَبًا بِالْعَالَم", "مدرسة", "  إلى  ", "كيف حالك؟"] {
            let once = normalize_arabic(sample);
            assert_eq!(normalize_arabic(&once), once);
        }
    }

    #[test]
    fn tashkeel_range_bounds() {
        assert!(is_tashkeel('\u{064B}'));
        assert!(is_tashkeel('\u{065F}'));
        assert!(!is_tashkeel('\u{064A}'));
        assert!(!is_tashkeel('\u{0660}'));
    }
}
