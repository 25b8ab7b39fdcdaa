//! Word list loading utilities
//!
//! Word list files are newline separated. Each token is trimmed and
//! uppercased, and only tokens of exactly the requested length are kept.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load the words of one length from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_grid::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words/5.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_word_list(&content, length))
}

/// Parse newline-separated text into words of `length` letters
///
/// Blank lines, wrong lengths and non-alphabetic tokens are skipped.
///
/// # Examples
/// ```
/// use wordle_grid::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list("crane\n  slate \nhi\nab3de\n", 5);
/// let texts: Vec<&str> = words.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["CRANE", "SLATE"]);
/// ```
#[must_use]
pub fn parse_word_list(content: &str, length: usize) -> Vec<Word> {
    words_from_iter(content.lines(), length)
}

/// Convert embedded string slice to Word vector, keeping `length`-letter words
#[must_use]
pub fn words_from_slice(slice: &[&str], length: usize) -> Vec<Word> {
    words_from_iter(slice.iter().copied(), length)
}

fn words_from_iter<'a>(tokens: impl Iterator<Item = &'a str>, length: usize) -> Vec<Word> {
    tokens
        .map(str::trim)
        .filter(|t| t.len() == length)
        .filter_map(|t| Word::new(t).ok())
        .collect()
}
