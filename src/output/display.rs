//! Display functions for the line-based front end

use super::formatters::emoji_board;
use crate::commands::ScoreReport;
use crate::core::{KeyVerdicts, Verdict};
use crate::game::{Game, GameStatus};
use crate::input::VIRTUAL_KEYBOARD;
use colored::{ColoredString, Colorize};

/// A letter tile coloured by its verdict
#[must_use]
pub fn colored_tile(letter: char, verdict: Verdict) -> ColoredString {
    let text = format!(" {letter} ");
    match verdict {
        Verdict::Correct => text.black().on_green().bold(),
        Verdict::Present => text.black().on_yellow().bold(),
        Verdict::Absent => text.white().on_bright_black(),
        Verdict::None => text.normal(),
    }
}

/// Print every row of the board; empty cells show as `_`
pub fn print_board(game: &Game) {
    println!();
    for row in game.grid().rows() {
        let tiles: Vec<String> = row
            .cells()
            .iter()
            .map(|c| colored_tile(c.letter().unwrap_or('_'), c.verdict()).to_string())
            .collect();
        println!("  {}", tiles.join(" "));
    }
    println!();
}

/// Print the on-screen keyboard with letter colours
pub fn print_keyboard(keys: &KeyVerdicts) {
    for row in VIRTUAL_KEYBOARD {
        let line: Vec<String> = row
            .iter()
            .filter_map(|name| name.bytes().next().filter(|_| name.len() == 1))
            .map(|b| colored_tile(char::from(b), keys.get(b)).to_string())
            .collect();
        println!("  {}", line.join(""));
    }
    println!();
}

/// Print the win or loss banner for a finished game
pub fn print_game_over(game: &Game) {
    let Some(secret) = game.revealed_secret() else {
        return;
    };

    println!("{}", "═".repeat(40).bright_cyan());
    match game.status() {
        GameStatus::Won => {
            let used = game.guesses_used();
            println!(
                "{}",
                format!(
                    "🎉 Solved in {used} {}!",
                    if used == 1 { "guess" } else { "guesses" }
                )
                .bright_green()
                .bold()
            );
        }
        GameStatus::Lost => {
            println!(
                "{} {}",
                "❌ Out of guesses. The word was".red().bold(),
                secret.text().bright_yellow().bold()
            );
        }
        GameStatus::Playing => {}
    }
    println!("{}", "═".repeat(40).bright_cyan());
    println!("\n{}\n", emoji_board(game));
}

/// Print the result of scoring one guess against a secret
pub fn print_score_result(report: &ScoreReport) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess:  {}\nSecret: {}",
        report.guess.text().bright_white().bold(),
        report.secret.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    let tiles: Vec<String> = report
        .guess
        .letters()
        .iter()
        .zip(report.score.letters())
        .map(|(&b, &v)| colored_tile(char::from(b), v).to_string())
        .collect();
    println!("\n  {}   {}", tiles.join(" "), report.score.to_emoji());

    println!(
        "\n  Correct: {}  Present: {}",
        report.score.count_correct().to_string().green(),
        report.score.count_present().to_string().yellow()
    );

    let keys: Vec<String> = report
        .score
        .keys()
        .iter()
        .map(|(ch, v)| format!("{ch}{}", v.symbol()))
        .collect();
    println!("  Keys:    {}\n", keys.join(" "));
}
