//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: type a whole guess and press Enter.

use crate::game::{Command, GameError, Lexicon, Outcome, SecretSource};
use crate::output::{print_board, print_game_over, print_keyboard};
use crate::session::Session;
use colored::Colorize;
use std::io::{self, Write};

/// What one line of input did
#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    /// The line went to the game
    Played(Result<Outcome, GameError>),
    /// Reveal toggled to this setting
    Revealed(bool),
    /// Unrecognized command
    Help,
    Quit,
}

/// Marks a line as a command rather than a guess
pub const COMMAND_PREFIX: char = ':';

/// Interpret one line of input against the session
///
/// Lines starting with `:` are commands: `:quit`, `:new`, `:reveal`,
/// `:size <letters> <rows>`. Anything else is taken as a guess, so words such
/// as NEW or QUIT can still be played.
pub fn process_line<W: Lexicon + SecretSource>(session: &mut Session<W>, line: &str) -> Step {
    let line = line.trim();
    let Some(command) = line.strip_prefix(COMMAND_PREFIX) else {
        if line.is_empty() || line.contains(char::is_whitespace) {
            return Step::Help;
        }
        return Step::Played(session.enter_guess(line));
    };

    let mut parts = command.split_whitespace();
    match parts.next().map(str::to_lowercase).as_deref() {
        Some("quit" | "q" | "exit") => Step::Quit,
        Some("new" | "n") => Step::Played(session.apply(Command::NEW_GAME)),
        Some("reveal") => Step::Revealed(session.toggle_reveal()),
        Some("size") => {
            let letters = parts.next().and_then(|s| s.parse().ok());
            let rows = parts.next().and_then(|s| s.parse().ok());
            if letters.is_none() && rows.is_none() {
                return Step::Help;
            }
            Step::Played(session.apply(Command::Reset { letters, rows }))
        }
        _ => Step::Help,
    }
}

fn print_help() {
    println!("Type a guess and press Enter.");
    println!("Commands: ':quit', ':new', ':reveal', ':size <letters> <rows>'\n");
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<W: Lexicon + SecretSource>(session: &mut Session<W>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════╗");
    println!("║          Wordle Grid - Simple        ║");
    println!("╚══════════════════════════════════════╝\n");
    print_help();

    loop {
        let game = session.game();
        print_board(game);
        print_keyboard(game.keys());
        if let Some(secret) = session.visible_secret().filter(|_| !game.is_over()) {
            println!("  (secret: {})\n", secret.text().bright_black());
        }

        let prompt = if game.is_over() {
            "Command".to_string()
        } else {
            format!("Guess {}/{}", game.guesses_used() + 1, game.dimensions().rows())
        };
        let Some(line) = get_user_input(&prompt)? else {
            return Ok(());
        };

        match process_line(session, &line) {
            Step::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Step::Help => print_help(),
            Step::Revealed(on) => {
                println!("Secret {}", if on { "shown" } else { "hidden" });
            }
            Step::Played(Ok(outcome)) => match outcome {
                outcome if outcome.is_terminal() => {
                    print_board(session.game());
                    print_game_over(session.game());
                    println!("Type ':new' for another game or ':quit' to exit.\n");
                }
                Outcome::Reset => {
                    println!("\n🔄 New {} game started!", session.game().dimensions());
                }
                Outcome::Ignored => {
                    println!("Game is over. Type ':new' or ':quit'.");
                }
                _ => {}
            },
            Step::Played(Err(e)) => println!("{}", format!("❌ {e}").red()),
        }
    }
}

/// Read one trimmed line; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok((read > 0).then(|| input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Dimensions, GameStatus, Rejection};
    use crate::wordlists::WordBank;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn session() -> Session<WordBank> {
        sized_session(Dimensions::default())
    }

    fn sized_session(dims: Dimensions) -> Session<WordBank> {
        Session::new(WordBank::embedded(), dims, StdRng::seed_from_u64(3)).unwrap()
    }

    fn secret_of(s: &mut Session<WordBank>) -> String {
        s.toggle_reveal();
        let secret = s.visible_secret().unwrap().text().to_string();
        s.toggle_reveal();
        secret
    }

    /// Submit each word in turn, expecting it to be scored as a guess
    fn play_as_guesses(s: &mut Session<WordBank>, words: &[&str]) {
        let secret = secret_of(s);
        for (row, word) in words.iter().enumerate() {
            let expected = if word.eq_ignore_ascii_case(&secret) {
                Outcome::Won
            } else {
                Outcome::Advanced { row: row + 1 }
            };
            assert_eq!(process_line(s, word), Step::Played(Ok(expected)), "{word}");
            if expected == Outcome::Won {
                return;
            }
        }
        assert_eq!(s.game().guesses_used(), words.len());
    }

    #[test]
    fn guess_lines_are_submitted() {
        let mut s = session();
        let step = process_line(&mut s, "  crane ");
        let won = s.game().status() == GameStatus::Won;
        let expected = if won {
            Outcome::Won
        } else {
            Outcome::Advanced { row: 1 }
        };
        assert_eq!(step, Step::Played(Ok(expected)));
    }

    #[test]
    fn command_words_are_playable_guesses() {
        let dims = Dimensions::new(3, 6).unwrap();
        let mut s = sized_session(dims);
        play_as_guesses(&mut s, &["new", "NEW"]);
        assert_eq!(s.game().dimensions(), dims);

        let dims = Dimensions::new(4, 6).unwrap();
        let mut s = sized_session(dims);
        play_as_guesses(&mut s, &["quit", "exit", "size"]);
        assert_eq!(s.game().dimensions(), dims);
    }

    #[test]
    fn bad_guesses_are_rejected() {
        let mut s = session();
        assert_eq!(
            process_line(&mut s, "cat"),
            Step::Played(Err(Rejection::WrongLength {
                expected: 5,
                actual: 3
            }
            .into()))
        );
        assert_eq!(
            process_line(&mut s, "zzzzz"),
            Step::Played(Err(Rejection::UnknownWord("ZZZZZ".into()).into()))
        );
        assert_eq!(s.game().guesses_used(), 0);
    }

    #[test]
    fn reveal_then_win() {
        let mut s = session();
        assert_eq!(process_line(&mut s, ":reveal"), Step::Revealed(true));
        let secret = s.visible_secret().unwrap().text().to_string();
        assert_eq!(process_line(&mut s, &secret), Step::Played(Ok(Outcome::Won)));
        assert_eq!(process_line(&mut s, &secret), Step::Played(Ok(Outcome::Ignored)));
    }

    #[test]
    fn size_command_resizes() {
        let mut s = session();
        assert_eq!(
            process_line(&mut s, ":size 3 4"),
            Step::Played(Ok(Outcome::Reset))
        );
        assert_eq!(s.game().dimensions(), Dimensions::new(3, 4).unwrap());

        assert!(matches!(
            process_line(&mut s, ":size 9"),
            Step::Played(Err(GameError::Rejected(Rejection::OutOfBounds(_))))
        ));
        assert_eq!(process_line(&mut s, ":size"), Step::Help);
    }

    #[test]
    fn quit_and_unknown_commands() {
        let mut s = session();
        assert_eq!(process_line(&mut s, ":QUIT"), Step::Quit);
        assert_eq!(process_line(&mut s, ": q"), Step::Quit);
        assert_eq!(process_line(&mut s, ":bogus"), Step::Help);
        assert_eq!(process_line(&mut s, "two words"), Step::Help);
        assert_eq!(process_line(&mut s, ""), Step::Help);
        assert_eq!(process_line(&mut s, ":new"), Step::Played(Ok(Outcome::Reset)));
    }
}
