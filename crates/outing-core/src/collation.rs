//! Korean-style name ordering.
//!
//! Code-point order is wrong for mixed names (upper-case Latin before
//! lower-case, jamo after every syllable), so names are compared by a
//! per-character key: separators, digits, Hangul, Latin letters (case-folded),
//! then everything else. Precomposed syllables are already in syllable order
//! by code point; a lone initial jamo sorts right before the first syllable
//! that starts with it (`ㄱ` < `가`).

use std::cmp::Ordering;

use crate::hangul;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Separator,
    Digit,
    Hangul,
    Latin,
    Other,
}

/// Primary sort key of one character
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct PrimaryKey {
    class: CharClass,
    weight: u32,
}

fn primary_key(c: char) -> PrimaryKey {
    let (class, weight) = if c.is_whitespace() || c.is_ascii_punctuation() {
        (CharClass::Separator, c as u32)
    } else if c.is_ascii_digit() {
        (CharClass::Digit, c as u32)
    } else if c.is_alphabetic() && (c.is_ascii() || is_latin_supplement(c)) {
        let folded = c.to_lowercase().next().unwrap_or(c);
        (CharClass::Latin, folded as u32)
    } else if let Some(index) = hangul::choseong_position(c) {
        let first_syllable = index as u32 * hangul::SYLLABLES_PER_INITIAL;
        (CharClass::Hangul, first_syllable * 2)
    } else if hangul::is_syllable(c) {
        (CharClass::Hangul, (c as u32 - hangul::SYLLABLE_FIRST) * 2 + 1)
    } else {
        (CharClass::Other, c as u32)
    };
    PrimaryKey { class, weight }
}

fn is_latin_supplement(c: char) -> bool {
    matches!(c as u32, 0x00C0..=0x024F)
}

/// Lower-case sorts before upper-case when everything else is equal
fn case_key(c: char) -> u8 {
    u8::from(c.is_uppercase())
}

/// Compare two names in Korean-locale order.
///
/// Total and deterministic: names that compare equal by key fall back to
/// plain code-point order.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(primary_key)
        .cmp(b.chars().map(primary_key))
        .then_with(|| a.chars().map(case_key).cmp(b.chars().map(case_key)))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut names: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        names.sort_by(|a, b| compare_names(a, b));
        names
    }

    #[test]
    fn test_syllables_sort_in_syllable_order() {
        assert_eq!(
            sorted(&["하루", "가나", "나비", "가다", "다람"]),
            vec!["가나", "가다", "나비", "다람", "하루"]
        );
    }

    #[test]
    fn test_hangul_before_latin() {
        assert_eq!(
            sorted(&["유리", "Zed", "abc", "1a", "ㄱ", "가"]),
            vec!["1a", "ㄱ", "가", "유리", "abc", "Zed"]
        );
    }

    #[test]
    fn test_latin_is_case_insensitive_with_lowercase_first() {
        assert_eq!(sorted(&["b", "A", "a", "B"]), vec!["a", "A", "b", "B"]);
    }

    #[test]
    fn test_digits_before_letters() {
        assert_eq!(sorted(&["a1", "1a", "가"]), vec!["1a", "가", "a1"]);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(
            sorted(&["카렌(수영복)", "카렌"]),
            vec!["카렌", "카렌(수영복)"]
        );
    }

    #[test]
    fn test_qualifier_sorts_before_longer_name() {
        // '(' is a separator, ranked below any syllable
        assert_eq!(
            sorted(&["카렌나", "카렌(수영복)"]),
            vec!["카렌(수영복)", "카렌나"]
        );
    }

    #[test]
    fn test_jamo_sorts_before_its_syllables() {
        assert_eq!(sorted(&["가", "ㄱ", "ㄴ", "까"]), vec!["ㄱ", "가", "까", "ㄴ"]);
    }

    #[test]
    fn test_compare_is_total() {
        assert_eq!(compare_names("유리", "유리"), Ordering::Equal);
        assert_ne!(compare_names("ａ", "a"), Ordering::Equal);
    }
}
