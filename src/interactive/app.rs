//! TUI application state and logic

use crate::game::{Dimensions, GameError, MAX_ROWS, Outcome};
use crate::input::{Action, action_from_key_event};
use crate::session::Session;
use crate::wordlists::WordBank;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::error;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long the board border stays highlighted after a rejection or game end
pub const FLASH_DURATION: Duration = Duration::from_millis(500);

const TICK_RATE: Duration = Duration::from_millis(50);
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub session: Session<WordBank>,
    pub messages: Vec<Message>,
    pub flash: Option<Flash>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Short-lived highlight of the board
#[derive(Debug, Clone, Copy)]
pub struct Flash {
    pub style: MessageStyle,
    pub started: Instant,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of guesses; index 0 is unused
    pub guess_distribution: [usize; MAX_ROWS + 1],
}

impl Statistics {
    /// Win percentage, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }

    fn record_win(&mut self, guesses: usize) {
        self.total_games += 1;
        self.games_won += 1;
        if let Some(slot) = self.guess_distribution.get_mut(guesses) {
            *slot += 1;
        }
    }

    fn record_loss(&mut self) {
        self.total_games += 1;
    }
}

impl App {
    #[must_use]
    pub fn new(session: Session<WordBank>) -> Self {
        let mut app = Self {
            session,
            messages: Vec::new(),
            flash: None,
            stats: Statistics::default(),
            should_quit: false,
        };
        app.add_message(
            &format!("Guess the {}-letter word!", app.dimensions().letters()),
            MessageStyle::Info,
        );
        app
    }

    #[inline]
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.session.game().dimensions()
    }

    /// Carry out one front-end action
    pub fn handle_action(&mut self, action: Action) {
        let result = match action {
            Action::Game(command) => self.session.apply(command),
            Action::AdjustLetters(delta) => self.session.adjust_letters(delta),
            Action::AdjustRows(delta) => self.session.adjust_rows(delta),
            Action::ToggleReveal => {
                let text = if self.session.toggle_reveal() {
                    "Secret shown"
                } else {
                    "Secret hidden"
                };
                self.add_message(text, MessageStyle::Info);
                return;
            }
            Action::Quit => {
                self.should_quit = true;
                return;
            }
        };
        self.report(result);
    }

    fn report(&mut self, result: Result<Outcome, GameError>) {
        match result {
            Ok(Outcome::Won) => {
                let game = self.session.game();
                let used = game.guesses_used();
                let rows = game.dimensions().rows();
                self.stats.record_win(used);
                self.start_flash(MessageStyle::Success);
                self.add_message(
                    &format!("Solved in {used}/{rows}! Ctrl+N for a new game."),
                    MessageStyle::Success,
                );
            }
            Ok(Outcome::Lost) => {
                let secret = self
                    .session
                    .visible_secret()
                    .map(|w| w.text().to_string())
                    .unwrap_or_default();
                self.stats.record_loss();
                self.start_flash(MessageStyle::Error);
                self.add_message(
                    &format!("Out of guesses. The word was {secret}."),
                    MessageStyle::Error,
                );
            }
            Ok(Outcome::Reset) => {
                self.messages.clear();
                self.flash = None;
                self.add_message(
                    &format!("New {} game started", self.dimensions()),
                    MessageStyle::Info,
                );
            }
            Ok(_) => {}
            Err(e) => {
                if !e.is_rejection() {
                    error!("{e}");
                }
                self.start_flash(MessageStyle::Error);
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    fn start_flash(&mut self, style: MessageStyle) {
        self.flash = Some(Flash {
            style,
            started: Instant::now(),
        });
    }

    /// The active flash style, if it has not yet expired at `now`
    #[must_use]
    pub fn flash_style(&self, now: Instant) -> Option<MessageStyle> {
        self.flash
            .filter(|f| now.saturating_duration_since(f.started) < FLASH_DURATION)
            .map(|f| f.style)
    }

    /// Drop an expired flash
    pub fn tick(&mut self, now: Instant) {
        if self.flash_style(now).is_none() {
            self.flash = None;
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK_RATE)?
            && let Event::Key(key) = event::read()?
        {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let game = app.session.game();
            let action = action_from_key_event(key, game.cursor(), game.dimensions().letters());
            if let Some(action) = action {
                app.handle_action(action);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
