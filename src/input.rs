//! Input adapter
//!
//! Maps raw key input onto game commands and front-end actions. Nothing here
//! touches game state.

use crate::game::{Command, Cursor};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// On-screen keyboard, top row first
pub const VIRTUAL_KEYBOARD: [&[&str]; 3] = [
    &["Q", "W", "E", "R", "T", "Y", "U", "I", "O", "P"],
    &["A", "S", "D", "F", "G", "H", "J", "K", "L"],
    &["ENTER", "Z", "X", "C", "V", "B", "N", "M", "BACKSPACE"],
];

/// What the front end should do for a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Forward to the game
    Game(Command),
    /// Change the word length by this much
    AdjustLetters(isize),
    /// Change the row count by this much
    AdjustRows(isize),
    /// Show or hide the secret
    ToggleReveal,
    Quit,
}

/// Map a virtual keyboard key name to a command
///
/// Accepts single letters (either case), `ENTER`, and `BACKSPACE`/`DEL`.
///
/// # Examples
/// ```
/// use wordle_grid::game::Command;
/// use wordle_grid::input::command_from_key_name;
///
/// assert_eq!(command_from_key_name("q"), Some(Command::TypeLetter('Q')));
/// assert_eq!(command_from_key_name("ENTER"), Some(Command::SubmitGuess));
/// assert_eq!(command_from_key_name("DEL"), Some(Command::DeleteLetter));
/// assert_eq!(command_from_key_name("7"), None);
/// ```
#[must_use]
pub fn command_from_key_name(name: &str) -> Option<Command> {
    let name = name.trim().to_ascii_uppercase();
    match name.as_str() {
        "ENTER" => Some(Command::SubmitGuess),
        "BACKSPACE" | "DEL" => Some(Command::DeleteLetter),
        _ => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_alphabetic() => Some(Command::TypeLetter(c)),
                _ => None,
            }
        }
    }
}

/// Map a terminal key event to an action
///
/// Arrow keys move the cursor within `cursor.row` and stop at either end of a
/// row `letters` wide.
#[must_use]
pub fn action_from_key_event(key: KeyEvent, cursor: Cursor, letters: usize) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let Cursor { row, col } = cursor;

    match key.code {
        KeyCode::Char('c') if ctrl => Some(Action::Quit),
        KeyCode::Char('n') if ctrl => Some(Action::Game(Command::NEW_GAME)),
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Tab => Some(Action::ToggleReveal),

        // Grid size
        KeyCode::Char('+' | '=') => Some(Action::AdjustLetters(1)),
        KeyCode::Char('-' | '_') => Some(Action::AdjustLetters(-1)),
        KeyCode::Char(']') => Some(Action::AdjustRows(1)),
        KeyCode::Char('[') => Some(Action::AdjustRows(-1)),

        // Editing
        KeyCode::Char(c) if !ctrl && c.is_ascii_alphabetic() => {
            Some(Action::Game(Command::TypeLetter(c)))
        }
        KeyCode::Backspace | KeyCode::Delete => Some(Action::Game(Command::DeleteLetter)),
        KeyCode::Enter => Some(Action::Game(Command::SubmitGuess)),

        // Cursor
        KeyCode::Left => col
            .checked_sub(1)
            .map(|col| Action::Game(Command::MoveCursor { row, col })),
        KeyCode::Right => (col + 1 < letters)
            .then(|| Action::Game(Command::MoveCursor { row, col: col + 1 })),
        KeyCode::Home => Some(Action::Game(Command::MoveCursor { row, col: 0 })),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Option<Action> {
        action_from_key_event(KeyEvent::from(code), Cursor { row: 2, col: 3 }, 5)
    }

    #[test]
    fn every_virtual_key_maps_to_a_command() {
        for row in VIRTUAL_KEYBOARD {
            for &name in row {
                assert!(command_from_key_name(name).is_some(), "{name} unmapped");
            }
        }
    }

    #[test]
    fn key_names_are_normalized() {
        assert_eq!(command_from_key_name("a"), Some(Command::TypeLetter('A')));
        assert_eq!(command_from_key_name(" Z "), Some(Command::TypeLetter('Z')));
        assert_eq!(
            command_from_key_name("backspace"),
            Some(Command::DeleteLetter)
        );
        assert_eq!(command_from_key_name(""), None);
        assert_eq!(command_from_key_name("AB"), None);
        assert_eq!(command_from_key_name("!"), None);
    }

    #[test]
    fn letters_and_editing_keys() {
        assert_eq!(
            key(KeyCode::Char('x')),
            Some(Action::Game(Command::TypeLetter('x')))
        );
        assert_eq!(
            key(KeyCode::Backspace),
            Some(Action::Game(Command::DeleteLetter))
        );
        assert_eq!(key(KeyCode::Enter), Some(Action::Game(Command::SubmitGuess)));
        assert_eq!(key(KeyCode::Char('5')), None);
    }

    #[test]
    fn arrows_stay_on_cursor_row() {
        assert_eq!(
            key(KeyCode::Left),
            Some(Action::Game(Command::MoveCursor { row: 2, col: 2 }))
        );
        assert_eq!(
            key(KeyCode::Right),
            Some(Action::Game(Command::MoveCursor { row: 2, col: 4 }))
        );
        let at_origin =
            action_from_key_event(KeyEvent::from(KeyCode::Left), Cursor::default(), 5);
        assert_eq!(at_origin, None);
    }

    #[test]
    fn right_arrow_stops_at_last_column() {
        let right = KeyEvent::from(KeyCode::Right);
        assert_eq!(action_from_key_event(right, Cursor { row: 1, col: 4 }, 5), None);
        assert_eq!(action_from_key_event(right, Cursor { row: 0, col: 1 }, 2), None);
        assert_eq!(
            action_from_key_event(right, Cursor { row: 0, col: 0 }, 2),
            Some(Action::Game(Command::MoveCursor { row: 0, col: 1 }))
        );
    }

    #[test]
    fn shell_keys() {
        assert_eq!(key(KeyCode::Esc), Some(Action::Quit));
        assert_eq!(key(KeyCode::Tab), Some(Action::ToggleReveal));
        assert_eq!(key(KeyCode::Char('+')), Some(Action::AdjustLetters(1)));
        assert_eq!(key(KeyCode::Char('[')), Some(Action::AdjustRows(-1)));

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_from_key_event(ctrl_c, Cursor::default(), 5), Some(Action::Quit));

        let ctrl_n = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL);
        assert_eq!(
            action_from_key_event(ctrl_n, Cursor::default(), 5),
            Some(Action::Game(Command::NEW_GAME))
        );
    }
}
