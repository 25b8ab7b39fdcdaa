//! Word lists
//!
//! Embedded lists compiled into the binary for every supported length, a
//! loader for lists on disk, and the [`WordBank`] that serves both.

mod bank;
mod embedded;
pub mod loader;

pub use bank::WordBank;
pub use embedded::{
    WORDS_2, WORDS_2_COUNT, WORDS_3, WORDS_3_COUNT, WORDS_4, WORDS_4_COUNT, WORDS_5,
    WORDS_5_COUNT, WORDS_6, WORDS_6_COUNT,
};

/// Embedded list for a word length; empty for unsupported lengths
#[must_use]
pub fn embedded_words(length: usize) -> &'static [&'static str] {
    match length {
        2 => WORDS_2,
        3 => WORDS_3,
        4 => WORDS_4,
        5 => WORDS_5,
        6 => WORDS_6,
        _ => &[],
    }
}

/// Secret used when no word list is available for a length
#[must_use]
pub const fn fallback_secret(length: usize) -> &'static str {
    match length {
        2 => "HI",
        3 => "TEE",
        4 => "FOUR",
        5 => "HELLO",
        6 => "SIXERS",
        _ => "WORD",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_match_consts() {
        assert_eq!(WORDS_2.len(), WORDS_2_COUNT);
        assert_eq!(WORDS_3.len(), WORDS_3_COUNT);
        assert_eq!(WORDS_4.len(), WORDS_4_COUNT);
        assert_eq!(WORDS_5.len(), WORDS_5_COUNT);
        assert_eq!(WORDS_6.len(), WORDS_6_COUNT);
    }

    #[test]
    fn embedded_words_have_their_length() {
        for length in 2..=6 {
            for &word in embedded_words(length) {
                assert_eq!(word.len(), length, "Word '{word}' is not {length} letters");
                assert!(
                    word.chars().all(|c| c.is_ascii_alphabetic()),
                    "Word '{word}' contains non-letters"
                );
            }
        }
    }

    #[test]
    fn unsupported_length_has_no_words() {
        assert!(embedded_words(1).is_empty());
        assert!(embedded_words(7).is_empty());
    }

    #[test]
    fn fallbacks_have_their_length() {
        for length in 2..=6 {
            assert_eq!(fallback_secret(length).len(), length);
        }
    }
}
