//! Session controller
//!
//! Owns the current [`Game`] together with the word source, the random number
//! generator and the reveal toggle. All commands are applied one at a time,
//! either directly or through a FIFO queue, so a game is never mutated by two
//! commands at once.

use crate::core::Word;
use crate::game::{
    Command, Dimensions, Game, GameError, Lexicon, Outcome, Rejection, SecretSource,
};
use log::{debug, info};
use rand::rngs::StdRng;
use std::collections::VecDeque;

/// A game in progress plus everything needed to start the next one
pub struct Session<W> {
    words: W,
    game: Game,
    rng: StdRng,
    reveal: bool,
    queue: VecDeque<Command>,
}

impl<W: Lexicon + SecretSource> Session<W> {
    /// Start a session with a first game of the given size
    ///
    /// # Errors
    /// Returns `GameError` if `words` produces a secret of the wrong length.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordle_grid::game::{Dimensions, GameStatus};
    /// use wordle_grid::session::Session;
    /// use wordle_grid::wordlists::WordBank;
    ///
    /// let session = Session::new(
    ///     WordBank::embedded(),
    ///     Dimensions::default(),
    ///     StdRng::seed_from_u64(42),
    /// )
    /// .unwrap();
    /// assert_eq!(session.game().status(), GameStatus::Playing);
    /// assert!(session.visible_secret().is_none());
    /// ```
    pub fn new(words: W, dims: Dimensions, mut rng: StdRng) -> Result<Self, GameError> {
        let secret = words.random_secret(dims.letters(), &mut rng)?;
        let game = Game::new(dims, secret)?;
        info!("new game {dims}");

        Ok(Self {
            words,
            game,
            rng,
            reveal: false,
            queue: VecDeque::new(),
        })
    }

    #[inline]
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    #[inline]
    #[must_use]
    pub const fn words(&self) -> &W {
        &self.words
    }

    /// Apply one command immediately
    ///
    /// # Errors
    /// Returns `GameError::Rejected` for validation failures (state unchanged)
    /// and other variants for contract violations.
    pub fn apply(&mut self, command: Command) -> Result<Outcome, GameError> {
        match command {
            Command::TypeLetter(ch) => Ok(self.game.type_letter(ch)),
            Command::DeleteLetter => Ok(self.game.delete_letter()),
            Command::MoveCursor { row, col } => Ok(self.game.move_cursor(row, col)),
            Command::SubmitGuess => self.submit(),
            Command::Reset { letters, rows } => self.reset(letters, rows),
        }
    }

    /// Queue a command for the next [`Session::drain`]
    pub fn enqueue(&mut self, command: Command) {
        self.queue.push_back(command);
    }

    /// Number of queued commands
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Apply every queued command in order, returning each result
    pub fn drain(&mut self) -> Vec<Result<Outcome, GameError>> {
        let mut results = Vec::with_capacity(self.pending());
        while let Some(command) = self.queue.pop_front() {
            results.push(self.apply(command));
        }
        results
    }

    /// Type a whole guess into the current row and submit it
    ///
    /// Overwrites whatever the row held. Used by line-based front ends.
    ///
    /// # Errors
    /// - `Rejection::WrongLength` if `text` does not fit the row
    /// - `Rejection::UnknownWord` if `text` has non-letters
    /// - anything [`Command::SubmitGuess`] can return
    pub fn enter_guess(&mut self, text: &str) -> Result<Outcome, GameError> {
        if self.game.is_over() {
            return Ok(Outcome::Ignored);
        }

        let expected = self.game.dimensions().letters();
        let actual = text.chars().count();
        if actual != expected {
            return Err(Rejection::WrongLength { expected, actual }.into());
        }
        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(Rejection::UnknownWord(text.to_uppercase()).into());
        }

        let row = self.game.cursor().row;
        self.game.move_cursor(row, 0);
        for ch in text.chars() {
            self.game.type_letter(ch);
        }
        self.submit()
    }

    /// Start a new game, optionally resized
    ///
    /// The grid, cursor, key verdicts, status and secret are all replaced
    /// together. Out-of-range sizes are rejected and the current game kept.
    ///
    /// # Errors
    /// Returns `Rejection::OutOfBounds` for bad sizes.
    pub fn reset(&mut self, letters: Option<usize>, rows: Option<usize>) -> Result<Outcome, GameError> {
        let current = self.game.dimensions();
        let dims = Dimensions::new(
            letters.unwrap_or(current.letters()),
            rows.unwrap_or(current.rows()),
        )
        .map_err(Rejection::OutOfBounds)?;

        let secret = self.words.random_secret(dims.letters(), &mut self.rng)?;
        self.game.reset(dims, secret)?;
        self.reveal = false;
        info!("new game {dims}");
        Ok(Outcome::Reset)
    }

    /// Grow or shrink the word length by `delta`
    ///
    /// # Errors
    /// - `Rejection::GameOver` once the game has ended
    /// - `Rejection::OutOfBounds` past the length bounds
    pub fn adjust_letters(&mut self, delta: isize) -> Result<Outcome, GameError> {
        let letters = self.adjusted(self.game.dimensions().letters(), delta)?;
        self.reset(Some(letters), None)
    }

    /// Grow or shrink the row count by `delta`
    ///
    /// # Errors
    /// - `Rejection::GameOver` once the game has ended
    /// - `Rejection::OutOfBounds` past the row bounds
    pub fn adjust_rows(&mut self, delta: isize) -> Result<Outcome, GameError> {
        let rows = self.adjusted(self.game.dimensions().rows(), delta)?;
        self.reset(None, Some(rows))
    }

    fn adjusted(&self, current: usize, delta: isize) -> Result<usize, GameError> {
        if self.game.is_over() {
            return Err(Rejection::GameOver.into());
        }
        // Below zero maps to zero, which every bound rejects
        Ok(current.saturating_add_signed(delta))
    }

    /// A new word list arrived
    ///
    /// Replaces the word source and starts a fresh game at the current size,
    /// since the old secret may not come from the new list.
    ///
    /// # Errors
    /// Returns `GameError` if the new source produces a bad secret; the old
    /// game is kept in that case.
    pub fn words_loaded(&mut self, words: W) -> Result<Outcome, GameError> {
        let dims = self.game.dimensions();
        let secret = words.random_secret(dims.letters(), &mut self.rng)?;
        let game = Game::new(dims, secret)?;

        self.words = words;
        self.game = game;
        self.reveal = false;
        debug!("word lists replaced");
        info!("new game {dims}");
        Ok(Outcome::Reset)
    }

    /// Flip the opt-in secret reveal; returns the new setting
    ///
    /// Does not touch the game.
    pub fn toggle_reveal(&mut self) -> bool {
        self.reveal = !self.reveal;
        self.reveal
    }

    /// Whether the player opted in to seeing the secret
    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.reveal
    }

    /// The secret if the game is over or the player opted in
    #[must_use]
    pub fn visible_secret(&self) -> Option<&Word> {
        self.game
            .revealed_secret()
            .or_else(|| self.reveal.then(|| self.game.secret()))
    }

    fn submit(&mut self) -> Result<Outcome, GameError> {
        let row = self.game.cursor().row;
        let outcome = self.game.submit_guess(&self.words)?;
        if outcome != Outcome::Ignored {
            debug!("row {row} accepted: {outcome:?}");
        }
        Ok(outcome)
    }
}
