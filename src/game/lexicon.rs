//! Word-list seams
//!
//! The game validates guesses against whatever recognized-word set the host
//! provides, and takes its secret from whatever source the host provides. It
//! never loads word lists itself.

use crate::core::{Word, WordError};
use rand::Rng;

/// Recognized-word set used to validate submitted guesses
pub trait Lexicon {
    /// Whether the list for `length` has been loaded and can validate guesses
    fn is_loaded(&self, length: usize) -> bool;

    /// Whether `word` is a recognized word
    fn contains(&self, word: &Word) -> bool;
}

/// Where new secrets come from
pub trait SecretSource {
    /// Draw a secret of exactly `length` letters
    ///
    /// # Errors
    /// Returns `WordError` if the source produces an invalid word.
    fn random_secret<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> Result<Word, WordError>;
}

/// A plain list of words, in any case
impl Lexicon for [&str] {
    fn is_loaded(&self, length: usize) -> bool {
        self.iter().any(|w| w.len() == length)
    }

    fn contains(&self, word: &Word) -> bool {
        self.iter().any(|w| w.eq_ignore_ascii_case(word.text()))
    }
}
