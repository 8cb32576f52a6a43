//! Hangul syllable decomposition for initial-consonant (choseong) search.
//!
//! Every precomposed syllable in `U+AC00..=U+D7A3` is laid out as
//! `0xAC00 + (initial * 21 + medial) * 28 + final`, so the initial consonant
//! is a plain integer division by `21 * 28 = 588`.

/// First precomposed Hangul syllable (`가`, 44032)
pub const SYLLABLE_FIRST: u32 = 0xAC00;

/// Last precomposed Hangul syllable (`힣`, 55203)
pub const SYLLABLE_LAST: u32 = 0xD7A3;

/// Syllables sharing one initial consonant (21 medials × 28 finals)
pub const SYLLABLES_PER_INITIAL: u32 = 588;

/// The 19 initial consonants, as compatibility jamo, in block order
pub const CHOSEONG: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ',
    'ㅍ', 'ㅎ',
];

/// True iff `c` is a precomposed Hangul syllable
pub fn is_syllable(c: char) -> bool {
    (SYLLABLE_FIRST..=SYLLABLE_LAST).contains(&(c as u32))
}

/// Position of the syllable's initial consonant in [`CHOSEONG`]
pub fn initial_index(c: char) -> Option<usize> {
    if !is_syllable(c) {
        return None;
    }
    Some(((c as u32 - SYLLABLE_FIRST) / SYLLABLES_PER_INITIAL) as usize)
}

/// Initial-consonant class of `c`; any other character maps to itself
pub fn initial_of(c: char) -> char {
    match initial_index(c) {
        Some(index) => CHOSEONG[index],
        None => c,
    }
}

/// Map every character of `s` to its initial-consonant class, in order
pub fn initials(s: &str) -> String {
    s.chars().map(initial_of).collect()
}

/// Position of a compatibility jamo in [`CHOSEONG`], if it is one
pub fn choseong_position(c: char) -> Option<usize> {
    CHOSEONG.iter().position(|&jamo| jamo == c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_bounds() {
        assert!(is_syllable('가'));
        assert!(is_syllable('힣'));
        assert!(!is_syllable(char::from_u32(SYLLABLE_FIRST - 1).unwrap()));
        assert!(!is_syllable(char::from_u32(SYLLABLE_LAST + 1).unwrap()));
        assert!(!is_syllable('ㄱ'));
        assert!(!is_syllable('a'));
    }

    #[test]
    fn test_non_block_characters_are_identity() {
        for c in ['a', 'Z', '0', '9', '(', ')', ' ', '-', 'é', 'ㄱ', 'ㅏ', '漢', 'あ'] {
            assert_eq!(initial_of(c), c, "{c:?} should map to itself");
        }
    }

    #[test]
    fn test_first_syllable_of_each_initial() {
        for (index, &jamo) in CHOSEONG.iter().enumerate() {
            let first = char::from_u32(SYLLABLE_FIRST + index as u32 * SYLLABLES_PER_INITIAL)
                .unwrap();
            let last =
                char::from_u32(SYLLABLE_FIRST + (index as u32 + 1) * SYLLABLES_PER_INITIAL - 1)
                    .unwrap();
            assert_eq!(initial_of(first), jamo);
            assert_eq!(initial_of(last), jamo);
        }
    }

    #[test]
    fn test_same_initial_same_class() {
        assert_eq!(initial_of('가'), initial_of('긴'));
        assert_eq!(initial_of('나'), initial_of('늑'));
        assert_eq!(initial_of('하'), initial_of('힣'));
        assert_ne!(initial_of('가'), initial_of('까'));
    }

    #[test]
    fn test_every_syllable_maps_to_a_choseong() {
        for cp in SYLLABLE_FIRST..=SYLLABLE_LAST {
            let c = char::from_u32(cp).unwrap();
            assert!(CHOSEONG.contains(&initial_of(c)));
        }
    }

    #[test]
    fn test_initials_of_mixed_string() {
        assert_eq!(initials("가나"), "ㄱㄴ");
        assert_eq!(initials("가다"), "ㄱㄷ");
        assert_eq!(initials("카렌(수영복)"), "ㅋㄹ(ㅅㅇㅂ)");
        assert_eq!(initials("abc 유리"), "abc ㅇㄹ");
    }

    #[test]
    fn test_choseong_position() {
        assert_eq!(choseong_position('ㄱ'), Some(0));
        assert_eq!(choseong_position('ㅎ'), Some(18));
        assert_eq!(choseong_position('ㅏ'), None);
        assert_eq!(choseong_position('가'), None);
    }
}
