//! Wordle Grid - CLI
//!
//! Play Wordle in the terminal with 2 to 6 letter words and 2 to 8 guesses,
//! either in a full-screen TUI or line by line.

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_grid::{
    commands::{run_simple, score_words},
    game::{DEFAULT_LETTERS, DEFAULT_ROWS, Dimensions},
    output::print_score_result,
    session::Session,
    wordlists::WordBank,
};

#[derive(Parser)]
#[command(
    name = "wordle_grid",
    about = "Wordle with adjustable word length and guess rows",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Letters per word (2-6)
    #[arg(short, long, global = true, default_value_t = DEFAULT_LETTERS)]
    letters: usize,

    /// Guess rows (2-8)
    #[arg(short, long, global = true, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Wordlist: 'embedded' (default) or a directory holding 2.txt .. 6.txt
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for secret selection, for repeatable games
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (type whole guesses, no TUI)
    Simple,

    /// Score one guess against a secret
    Score {
        /// The guessed word
        guess: String,

        /// The secret word
        secret: String,
    },
}

/// Load word lists based on the -w flag
fn load_words(wordlist: &str) -> WordBank {
    match wordlist {
        "embedded" => WordBank::embedded(),
        dir => {
            info!("loading word lists from {dir}");
            WordBank::load_from_dir(dir)
        }
    }
}

fn new_session(cli: &Cli) -> Result<Session<WordBank>> {
    let dims = Dimensions::new(cli.letters, cli.rows)?;
    let rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let session = Session::new(load_words(&cli.wordlist), dims, rng)?;
    Ok(session)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Default to Play mode if no command given
    match cli.command.as_ref().unwrap_or(&Commands::Play) {
        Commands::Play => run_play_command(&cli),
        Commands::Simple => run_simple_command(&cli),
        Commands::Score { guess, secret } => run_score_command(guess, secret),
    }
}

fn run_play_command(cli: &Cli) -> Result<()> {
    use wordle_grid::interactive::{App, run_tui};

    let app = App::new(new_session(cli)?);
    run_tui(app)
}

fn run_simple_command(cli: &Cli) -> Result<()> {
    let mut session = new_session(cli)?;
    run_simple(&mut session).map_err(|e| anyhow::anyhow!(e))
}

fn run_score_command(guess: &str, secret: &str) -> Result<()> {
    let report = score_words(guess, secret).map_err(|e| anyhow::anyhow!(e))?;
    print_score_result(&report);
    Ok(())
}
