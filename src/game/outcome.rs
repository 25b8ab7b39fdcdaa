//! Command outcomes and errors
//!
//! Three kinds of result come back from a command:
//! - `Ok(Outcome::Ignored)` for input that does not apply (silent no-op)
//! - `Err(GameError::Rejected(_))` for a validation failure the player should
//!   see; state is unchanged
//! - any other `GameError` for a caller bug, such as mismatched lengths

use super::DimensionError;
use crate::core::{ScoreError, WordError};
use std::fmt;

/// What a successfully processed command did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command did not apply and nothing changed
    Ignored,
    /// A letter was typed or deleted, or the cursor moved
    Edited,
    /// Guess accepted; play continues on this row
    Advanced { row: usize },
    /// Guess matched the secret
    Won,
    /// Last row used without a match
    Lost,
    /// A fresh game was started
    Reset,
}

impl Outcome {
    /// True for `Won` and `Lost`
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// A command refused for reasons the player can fix
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Submitted with empty cells in the current row
    IncompleteRow,
    /// No word list for this length has been loaded yet
    WordListUnavailable(usize),
    /// The guess is not in the word list
    UnknownWord(String),
    /// The guess has the wrong number of letters for this game
    WrongLength { expected: usize, actual: usize },
    /// Grid changes are locked once the game has ended
    GameOver,
    /// Requested grid size is out of bounds
    OutOfBounds(DimensionError),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteRow => write!(f, "Not enough letters"),
            Self::WordListUnavailable(n) => {
                write!(f, "Word list for {n} letters is not available")
            }
            Self::UnknownWord(word) => write!(f, "{word} is not in the word list"),
            Self::WrongLength { expected, actual } => {
                write!(f, "Guess must be {expected} letters, got {actual}")
            }
            Self::GameOver => write!(f, "Game is over; start a new game first"),
            Self::OutOfBounds(e) => write!(f, "{e}"),
        }
    }
}

/// Error type for game commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Validation failure; state unchanged
    Rejected(Rejection),
    /// Secret does not match the grid's word length
    SecretLength { expected: usize, actual: usize },
    /// Scorer refused its inputs
    Score(ScoreError),
    /// Invalid dimensions passed at construction
    Dimensions(DimensionError),
    /// Invalid word produced by a collaborator
    Word(WordError),
}

impl GameError {
    /// True if this is a player-facing rejection rather than a caller bug
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected(r) => write!(f, "{r}"),
            Self::SecretLength { expected, actual } => write!(
                f,
                "Secret has {actual} letters but the grid expects {expected}"
            ),
            Self::Score(e) => write!(f, "{e}"),
            Self::Dimensions(e) => write!(f, "{e}"),
            Self::Word(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Score(e) => Some(e),
            Self::Dimensions(e) => Some(e),
            Self::Word(e) => Some(e),
            Self::Rejected(_) | Self::SecretLength { .. } => None,
        }
    }
}

impl From<Rejection> for GameError {
    fn from(r: Rejection) -> Self {
        Self::Rejected(r)
    }
}

impl From<ScoreError> for GameError {
    fn from(e: ScoreError) -> Self {
        Self::Score(e)
    }
}

impl From<DimensionError> for GameError {
    fn from(e: DimensionError) -> Self {
        Self::Dimensions(e)
    }
}

impl From<WordError> for GameError {
    fn from(e: WordError) -> Self {
        Self::Word(e)
    }
}
