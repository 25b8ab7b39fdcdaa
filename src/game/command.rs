//! The game's command surface
//!
//! Every change to a game in progress is one of these commands. Hosts map
//! raw input onto them and feed them, in order, to a [`Session`].
//!
//! [`Session`]: crate::session::Session

/// A single player action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Type a letter at the cursor
    TypeLetter(char),
    /// Delete at or before the cursor
    DeleteLetter,
    /// Focus another cell of the current row
    MoveCursor { row: usize, col: usize },
    /// Submit the current row
    SubmitGuess,
    /// Start a new game, optionally with new dimensions
    Reset {
        letters: Option<usize>,
        rows: Option<usize>,
    },
}

impl Command {
    /// New game with the current dimensions
    pub const NEW_GAME: Self = Self::Reset {
        letters: None,
        rows: None,
    };
}
