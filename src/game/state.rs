//! Game state machine
//!
//! Owns the secret word, the grid, the cursor, the keyboard verdicts and the
//! win/loss status. Everything that changes during play goes through the
//! methods here; a new game is always a whole new `Game`.

use super::{Dimensions, GameError, Grid, Lexicon, Outcome, Rejection};
use crate::core::{KeyVerdicts, Word, score};

/// Lifecycle of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// True once the game has been won or lost
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// The one writable position in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

/// Complete state of one game
#[derive(Debug, Clone)]
pub struct Game {
    dims: Dimensions,
    grid: Grid,
    cursor: Cursor,
    keys: KeyVerdicts,
    status: GameStatus,
    secret: Word,
}

impl Game {
    /// Start a game with an empty grid and the cursor at the top left
    ///
    /// # Errors
    /// Returns `GameError::SecretLength` if the secret does not have exactly
    /// `dims.letters()` letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_grid::core::Word;
    /// use wordle_grid::game::{Dimensions, Game, GameStatus, Outcome};
    ///
    /// let mut game = Game::new(Dimensions::default(), Word::new("CRANE").unwrap()).unwrap();
    /// for ch in "crane".chars() {
    ///     game.type_letter(ch);
    /// }
    /// let words: &[&str] = &["CRANE"];
    /// assert_eq!(game.submit_guess(words), Ok(Outcome::Won));
    /// assert_eq!(game.status(), GameStatus::Won);
    /// ```
    pub fn new(dims: Dimensions, secret: Word) -> Result<Self, GameError> {
        if secret.len() != dims.letters() {
            return Err(GameError::SecretLength {
                expected: dims.letters(),
                actual: secret.len(),
            });
        }

        Ok(Self {
            dims,
            grid: Grid::new(dims),
            cursor: Cursor::default(),
            keys: KeyVerdicts::new(),
            status: GameStatus::Playing,
            secret,
        })
    }

    /// Replace this game with a fresh one
    ///
    /// On error the current game is left untouched.
    ///
    /// # Errors
    /// Same as [`Game::new`].
    pub fn reset(&mut self, dims: Dimensions, secret: Word) -> Result<(), GameError> {
        *self = Self::new(dims, secret)?;
        Ok(())
    }

    #[inline]
    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        self.dims
    }

    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Cumulative keyboard verdicts
    #[inline]
    #[must_use]
    pub const fn keys(&self) -> &KeyVerdicts {
        &self.keys
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Number of rows submitted so far
    #[must_use]
    pub const fn guesses_used(&self) -> usize {
        if self.status.is_over() {
            self.cursor.row + 1
        } else {
            self.cursor.row
        }
    }

    /// The secret, once the game is over
    #[must_use]
    pub const fn revealed_secret(&self) -> Option<&Word> {
        if self.status.is_over() {
            Some(&self.secret)
        } else {
            None
        }
    }

    /// The secret regardless of status; only for an explicit reveal
    pub(crate) const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Type a letter at the cursor
    ///
    /// Non-letters are ignored. The cursor moves right unless it is on the last
    /// column, where further letters overwrite the last cell.
    pub fn type_letter(&mut self, ch: char) -> Outcome {
        if self.status.is_over() || !ch.is_ascii_alphabetic() {
            return Outcome::Ignored;
        }

        let Cursor { row, col } = self.cursor;
        self.grid
            .set_letter(row, col, Some(ch.to_ascii_uppercase() as u8));
        if col + 1 < self.dims.letters() {
            self.cursor.col += 1;
        }
        Outcome::Edited
    }

    /// Delete at the cursor
    ///
    /// Clears the cursor cell if it has a letter. Otherwise steps back one
    /// column and clears that cell. Does nothing on an empty first column.
    pub fn delete_letter(&mut self) -> Outcome {
        if self.status.is_over() {
            return Outcome::Ignored;
        }

        let Cursor { row, col } = self.cursor;
        let occupied = self.grid.cell(row, col).is_some_and(|c| !c.is_empty());

        if occupied {
            self.grid.set_letter(row, col, None);
        } else if col > 0 {
            self.cursor.col = col - 1;
            self.grid.set_letter(row, col - 1, None);
        } else {
            return Outcome::Ignored;
        }
        Outcome::Edited
    }

    /// Move the cursor to another column of the current row
    ///
    /// Any other row, or a column past the end, is ignored.
    pub fn move_cursor(&mut self, row: usize, col: usize) -> Outcome {
        if self.status.is_over() || row != self.cursor.row || col >= self.dims.letters() {
            return Outcome::Ignored;
        }
        self.cursor.col = col;
        Outcome::Edited
    }

    /// Submit the current row as a guess
    ///
    /// The row must be full and a recognized word. An accepted guess is
    /// scored, its verdicts are stored in the row and merged into the
    /// keyboard, and then the game is won, lost, or moves to the next row.
    ///
    /// # Errors
    /// - `Rejection::IncompleteRow` if any cell is empty
    /// - `Rejection::WordListUnavailable` if `lexicon` cannot validate this length
    /// - `Rejection::UnknownWord` if the guess is not in `lexicon`
    ///
    /// State is unchanged on any error.
    pub fn submit_guess<L: Lexicon + ?Sized>(&mut self, lexicon: &L) -> Result<Outcome, GameError> {
        if self.status.is_over() {
            return Ok(Outcome::Ignored);
        }

        let row = self.cursor.row;
        let guess = self
            .grid
            .row(row)
            .guess()
            .ok_or(Rejection::IncompleteRow)?;

        let letters = self.dims.letters();
        if !lexicon.is_loaded(letters) {
            return Err(Rejection::WordListUnavailable(letters).into());
        }
        if !lexicon.contains(&guess) {
            return Err(Rejection::UnknownWord(guess.text().to_string()).into());
        }

        let result = score(&guess, &self.secret)?;
        self.grid.set_verdicts(row, result.letters());
        self.keys.merge(result.keys());

        if result.is_perfect() {
            self.status = GameStatus::Won;
            Ok(Outcome::Won)
        } else if row + 1 == self.dims.rows() {
            self.status = GameStatus::Lost;
            Ok(Outcome::Lost)
        } else {
            self.cursor = Cursor { row: row + 1, col: 0 };
            Ok(Outcome::Advanced { row: row + 1 })
        }
    }
}
