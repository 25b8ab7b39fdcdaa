//! Core domain types for the game
//!
//! Words, verdicts and the guess scorer. Everything here is pure: no grid,
//! cursor or input handling, and no external state.

mod keyboard;
mod score;
mod verdict;
mod word;

pub use keyboard::KeyVerdicts;
pub use score::{Score, ScoreError, score};
pub use verdict::Verdict;
pub use word::{MAX_LETTERS, MIN_LETTERS, Word, WordError};
