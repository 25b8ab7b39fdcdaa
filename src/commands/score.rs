//! Score command
//!
//! Scores one guess against a secret without playing a game.

use crate::core::{Score, Word, score};

/// Result of scoring a guess
#[derive(Debug, Clone)]
pub struct ScoreReport {
    pub guess: Word,
    pub secret: Word,
    pub score: Score,
}

/// Score `guess` against `secret`
///
/// Neither word needs to be in a word list.
///
/// # Errors
///
/// Returns an error if:
/// - Either word is invalid (wrong length or non-letters)
/// - The two words differ in length
pub fn score_words(guess: &str, secret: &str) -> Result<ScoreReport, String> {
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let secret = Word::new(secret).map_err(|e| format!("Invalid secret: {e}"))?;
    let score = score(&guess, &secret).map_err(|e| e.to_string())?;

    Ok(ScoreReport {
        guess,
        secret,
        score,
    })
}
