//! Formatting utilities for terminal output

use crate::game::{Game, GameStatus, Row};

/// Emoji line for a submitted row
#[must_use]
pub fn row_to_emoji(row: &Row) -> String {
    row.cells().iter().map(|c| c.verdict().emoji()).collect()
}

/// Shareable summary of a finished or in-progress game
///
/// Header shows guesses used out of rows, or `X` on a loss, followed by one
/// emoji line per submitted row.
#[must_use]
pub fn emoji_board(game: &Game) -> String {
    let rows = game.dimensions().rows();
    let used = game.guesses_used();
    let tally = if game.status() == GameStatus::Lost {
        "X".to_string()
    } else {
        used.to_string()
    };

    let mut out = format!("{} letters {tally}/{rows}", game.dimensions().letters());
    for row in game.grid().rows().iter().take(used) {
        out.push('\n');
        out.push_str(&row_to_emoji(row));
    }
    out
}
