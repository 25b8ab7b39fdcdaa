//! Per-length word lists used for validation and secret selection

use super::{embedded_words, fallback_secret, loader};
use crate::core::{MAX_LETTERS, MIN_LETTERS, Word, WordError};
use crate::game::{Lexicon, SecretSource};
use log::{debug, warn};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::{FxHashMap, FxHashSet};
use std::path::Path;

#[derive(Debug, Clone, Default)]
struct WordList {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

/// Recognized words for every supported length
///
/// A length with no words is treated as not loaded: guesses of that length
/// cannot be validated and secrets fall back to a fixed word.
#[derive(Debug, Clone, Default)]
pub struct WordBank {
    lists: FxHashMap<usize, WordList>,
}

impl WordBank {
    /// A bank with nothing loaded
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The word lists compiled into the binary
    ///
    /// # Examples
    /// ```
    /// use wordle_grid::core::Word;
    /// use wordle_grid::game::Lexicon;
    /// use wordle_grid::wordlists::WordBank;
    ///
    /// let bank = WordBank::embedded();
    /// assert!(bank.is_loaded(5));
    /// assert!(bank.contains(&Word::new("crane").unwrap()));
    /// ```
    #[must_use]
    pub fn embedded() -> Self {
        let mut bank = Self::empty();
        for length in MIN_LETTERS..=MAX_LETTERS {
            bank.insert(length, loader::words_from_slice(embedded_words(length), length));
        }
        bank
    }

    /// Load `{dir}/{length}.txt` for every supported length
    ///
    /// A missing or unreadable file leaves that length unloaded.
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        let mut bank = Self::empty();
        for length in MIN_LETTERS..=MAX_LETTERS {
            let path = dir.join(format!("{length}.txt"));
            match loader::load_from_file(&path, length) {
                Ok(words) => {
                    debug!("loaded {} words from {}", words.len(), path.display());
                    bank.insert(length, words);
                }
                Err(e) => warn!("no {length}-letter words: {}: {e}", path.display()),
            }
        }
        bank
    }

    /// Add words of one length, skipping other lengths and duplicates
    pub fn insert(&mut self, length: usize, words: impl IntoIterator<Item = Word>) {
        let list = self.lists.entry(length).or_default();
        for word in words {
            if word.len() == length && list.index.insert(word.clone()) {
                list.words.push(word);
            }
        }
    }

    /// All words of `length` letters, in load order
    #[must_use]
    pub fn words(&self, length: usize) -> &[Word] {
        self.lists
            .get(&length)
            .map(|l| l.words.as_slice())
            .unwrap_or_default()
    }

    /// Number of words of `length` letters
    #[must_use]
    pub fn count(&self, length: usize) -> usize {
        self.words(length).len()
    }
}

impl Lexicon for WordBank {
    fn is_loaded(&self, length: usize) -> bool {
        self.count(length) > 0
    }

    fn contains(&self, word: &Word) -> bool {
        self.lists
            .get(&word.len())
            .is_some_and(|l| l.index.contains(word))
    }
}

impl SecretSource for WordBank {
    fn random_secret<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> Result<Word, WordError> {
        if let Some(word) = self.words(length).choose(rng) {
            return Ok(word.clone());
        }
        let fallback = fallback_secret(length);
        warn!("no {length}-letter words loaded, using fallback secret");
        Word::new(fallback)
    }
}
