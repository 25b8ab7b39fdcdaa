//! Guess scoring
//!
//! Scores a guess against the secret under Wordle's duplicate-letter rules and
//! folds the result into per-key verdicts for the keyboard.

use super::{KeyVerdicts, Verdict, Word};
use std::fmt;

/// Outcome of scoring one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    letters: Vec<Verdict>,
    keys: KeyVerdicts,
}

/// Scoring was asked to compare words of different lengths
///
/// This is a caller bug; the scorer refuses rather than produce verdicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreError {
    LengthMismatch { guess: usize, secret: usize },
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { guess, secret } => write!(
                f,
                "Cannot score a {guess}-letter guess against a {secret}-letter secret"
            ),
        }
    }
}

impl std::error::Error for ScoreError {}

/// Score `guess` against `secret`
///
/// # Algorithm
/// 1. First pass: mark exact matches as correct and remove them from the pool
///    of secret letters
/// 2. Second pass: every other position takes a letter from what remains of the
///    pool if it can (present), otherwise it is absent
/// 3. Fold each position's verdict into the per-key map, keeping the strongest
///
/// Because exact matches consume the pool first, surplus copies of a letter in
/// the guess come out absent rather than present.
///
/// # Errors
/// Returns `ScoreError::LengthMismatch` if the words differ in length.
///
/// # Examples
/// ```
/// use wordle_grid::core::{Verdict, Word, score};
///
/// let guess = Word::new("PEPPY").unwrap();
/// let secret = Word::new("APPLE").unwrap();
/// let result = score(&guess, &secret).unwrap();
///
/// assert_eq!(
///     result.letters(),
///     &[
///         Verdict::Present,
///         Verdict::Present,
///         Verdict::Correct,
///         Verdict::Absent,
///         Verdict::Absent,
///     ]
/// );
/// assert_eq!(result.keys().get(b'P'), Verdict::Correct);
/// ```
pub fn score(guess: &Word, secret: &Word) -> Result<Score, ScoreError> {
    if guess.len() != secret.len() {
        return Err(ScoreError::LengthMismatch {
            guess: guess.len(),
            secret: secret.len(),
        });
    }

    let mut letters = vec![Verdict::Absent; guess.len()];
    let mut secret_available = secret.char_counts();

    // First pass: exact position matches
    for ((verdict, &g), &s) in letters
        .iter_mut()
        .zip(guess.letters())
        .zip(secret.letters())
    {
        if g == s {
            *verdict = Verdict::Correct;
            if let Some(count) = secret_available.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: right letter, wrong position, from what is left
    for (verdict, &g) in letters.iter_mut().zip(guess.letters()) {
        if *verdict == Verdict::Correct {
            continue;
        }
        if let Some(count) = secret_available.get_mut(&g)
            && *count > 0
        {
            *verdict = Verdict::Present;
            *count -= 1;
        }
    }

    let mut keys = KeyVerdicts::new();
    for (&g, &verdict) in guess.letters().iter().zip(&letters) {
        keys.record(g, verdict);
    }

    Ok(Score { letters, keys })
}

impl Score {
    /// Verdict for each position of the guess
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Verdict] {
        &self.letters
    }

    /// Per-key verdicts from this guess alone
    #[inline]
    #[must_use]
    pub const fn keys(&self) -> &KeyVerdicts {
        &self.keys
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.letters.iter().all(|&v| v == Verdict::Correct)
    }

    /// Count the number of correct positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(Verdict::Correct)
    }

    /// Count the number of present-but-misplaced positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(Verdict::Present)
    }

    /// Render as a string of emoji tiles, e.g. "🟨🟨🟩⬜⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.letters.iter().map(|v| v.emoji()).collect()
    }

    fn count(&self, wanted: Verdict) -> usize {
        self.letters.iter().filter(|&&v| v == wanted).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdicts(symbols: &str) -> Vec<Verdict> {
        symbols
            .chars()
            .map(|c| match c {
                'G' => Verdict::Correct,
                'Y' => Verdict::Present,
                '-' => Verdict::Absent,
                _ => panic!("bad symbol {c}"),
            })
            .collect()
    }

    fn score_words(guess: &str, secret: &str) -> Score {
        score(&Word::new(guess).unwrap(), &Word::new(secret).unwrap()).unwrap()
    }

    #[test]
    fn score_all_correct() {
        for text in ["HI", "TEE", "FOUR", "CRANE", "SIXERS", "AAAAA"] {
            let result = score_words(text, text);
            assert!(result.is_perfect());
            assert_eq!(result.count_correct(), text.len());
        }
    }

    #[test]
    fn score_disjoint_is_all_absent() {
        let result = score_words("ABCDE", "FGHIJ");
        assert_eq!(result.letters(), verdicts("-----").as_slice());
        assert_eq!(result.count_correct(), 0);
        assert_eq!(result.count_present(), 0);
        assert_eq!(result.keys().get(b'A'), Verdict::Absent);
    }

    #[test]
    fn score_exact_matches_consume_before_misplaced() {
        // Middle P is exact; the leading P takes the other P in APPLE;
        // the third P finds none left.
        let result = score_words("PEPPY", "APPLE");
        assert_eq!(result.letters(), verdicts("YYG--").as_slice());

        let keys = result.keys();
        assert_eq!(keys.get(b'P'), Verdict::Correct);
        assert_eq!(keys.get(b'E'), Verdict::Present);
        assert_eq!(keys.get(b'Y'), Verdict::Absent);
    }

    #[test]
    fn score_surplus_duplicates_are_absent() {
        // Only one P in SPORT, used by the exact match at index 1
        let result = score_words("PPPPP", "SPORT");
        assert_eq!(result.letters(), verdicts("-G---").as_slice());
        assert_eq!(result.keys().get(b'P'), Verdict::Correct);
    }

    #[test]
    fn score_duplicate_in_secret_both_present() {
        // SPEED vs ERASE: both Es are misplaced and ERASE has two
        let result = score_words("SPEED", "ERASE");
        assert_eq!(result.letters(), verdicts("Y-YY-").as_slice());
        assert_eq!(result.count_present(), 3);
    }

    #[test]
    fn score_misplaced_then_exact_same_letter() {
        // ROBOT vs FLOOR: first O misplaced, second O exact
        let result = score_words("ROBOT", "FLOOR");
        assert_eq!(result.letters(), verdicts("YY-G-").as_slice());
        assert_eq!(result.keys().get(b'O'), Verdict::Correct);
    }

    #[test]
    fn score_real_example() {
        let result = score_words("CRANE", "SLATE");
        assert_eq!(result.letters(), verdicts("--G-G").as_slice());
        assert_eq!(result.to_emoji(), "⬜⬜🟩⬜🟩");
    }

    #[test]
    fn score_key_present_survives_later_absent_in_same_guess() {
        // First E misplaced, second E has nothing left
        let result = score_words("EERIE", "HELLO");
        assert_eq!(result.letters(), verdicts("-G---").as_slice());
        assert_eq!(result.keys().get(b'E'), Verdict::Correct);

        let result = score_words("EASEL", "BREAD");
        assert_eq!(result.letters(), verdicts("YY---").as_slice());
        assert_eq!(result.keys().get(b'E'), Verdict::Present);
    }

    #[test]
    fn score_length_mismatch_is_refused() {
        let guess = Word::new("CRANE").unwrap();
        let secret = Word::new("SIXERS").unwrap();
        assert_eq!(
            score(&guess, &secret),
            Err(ScoreError::LengthMismatch {
                guess: 5,
                secret: 6
            })
        );
    }
}
