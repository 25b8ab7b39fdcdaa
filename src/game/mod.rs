//! Game state machine
//!
//! Grid, cursor, status and the commands that drive them.

mod command;
mod dimensions;
mod grid;
mod lexicon;
mod outcome;
mod state;

pub use command::Command;
pub use dimensions::{
    DEFAULT_LETTERS, DEFAULT_ROWS, DimensionError, Dimensions, MAX_ROWS, MIN_ROWS,
};
pub use grid::{Cell, Grid, Row};
pub use lexicon::{Lexicon, SecretSource};
pub use outcome::{GameError, Outcome, Rejection};
pub use state::{Cursor, Game, GameStatus};
