//! TUI rendering with ratatui
//!
//! Board tiles, the on-screen keyboard, messages and a status bar.

use super::app::{App, MessageStyle, Statistics};
use crate::core::{KeyVerdicts, Verdict};
use crate::game::{Game, GameStatus};
use crate::input::VIRTUAL_KEYBOARD;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use std::time::Instant;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(6),    // Board
            Constraint::Length(5), // Keyboard
            Constraint::Length(5), // Messages
            Constraint::Length(3), // Wins by guesses
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app.session.game().keys(), chunks[2]);
    render_messages(f, app, chunks[3]);
    render_distribution(f, app, chunks[4]);
    render_status(f, app, chunks[5]);
}

/// Background colour of a scored tile or key
#[must_use]
pub const fn verdict_color(verdict: Verdict) -> Color {
    match verdict {
        Verdict::Correct => Color::Green,
        Verdict::Present => Color::Yellow,
        Verdict::Absent => Color::DarkGray,
        Verdict::None => Color::Reset,
    }
}

fn tile_style(verdict: Verdict) -> Style {
    match verdict {
        Verdict::None => Style::default().fg(Color::White),
        scored => Style::default()
            .fg(Color::Black)
            .bg(verdict_color(scored))
            .add_modifier(Modifier::BOLD),
    }
}

fn message_color(style: MessageStyle) -> Color {
    match style {
        MessageStyle::Info => Color::White,
        MessageStyle::Success => Color::Green,
        MessageStyle::Error => Color::Red,
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE GRID")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn board_lines(game: &Game) -> Vec<Line<'static>> {
    let cursor = game.cursor();
    let mut lines = Vec::with_capacity(game.dimensions().rows());

    for (r, row) in game.grid().rows().iter().enumerate() {
        let mut spans = Vec::with_capacity(row.cells().len() * 2);
        for (c, cell) in row.cells().iter().enumerate() {
            let mut style = tile_style(cell.verdict());
            if !game.is_over() && r == cursor.row && c == cursor.col {
                style = style.add_modifier(Modifier::REVERSED);
            }
            let letter = cell.letter().unwrap_or('_');
            spans.push(Span::styled(format!(" {letter} "), style));
            spans.push(Span::raw(" "));
        }
        spans.pop();
        lines.push(Line::from(spans));
    }
    lines
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let game = app.session.game();
    let border = app
        .flash_style(Instant::now())
        .map_or(Color::White, message_color);

    let title = match app.session.visible_secret() {
        Some(secret) => format!(" {} | {} ", game.dimensions(), secret.text()),
        None => format!(" {} ", game.dimensions()),
    };

    let board = Paragraph::new(board_lines(game))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border)),
        );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, keys: &KeyVerdicts, area: Rect) {
    let lines: Vec<Line> = VIRTUAL_KEYBOARD
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .flat_map(|&name| {
                    let key = match name {
                        "ENTER" => Span::styled(" ENTER ", Style::default().fg(Color::Cyan)),
                        "BACKSPACE" => Span::styled(" DEL ", Style::default().fg(Color::Cyan)),
                        letter => {
                            let verdict = letter.bytes().next().map_or(Verdict::None, |b| keys.get(b));
                            Span::styled(format!(" {letter} "), tile_style(verdict))
                        }
                    };
                    [key, Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            ListItem::new(msg.text.clone()).style(Style::default().fg(message_color(msg.style)))
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

/// `guesses:wins` for each row count up to `rows`, or further if an earlier
/// larger game recorded a win there
fn distribution_spans(stats: &Statistics, rows: usize) -> Vec<Span<'static>> {
    let last_win = stats
        .guess_distribution
        .iter()
        .rposition(|&n| n > 0)
        .unwrap_or(0);
    let shown = rows.max(last_win);

    let mut spans = Vec::with_capacity(shown * 2);
    for (guesses, &wins) in stats.guess_distribution.iter().enumerate().take(shown + 1).skip(1) {
        let style = if wins > 0 {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("{guesses}:{wins}"), style));
        spans.push(Span::raw("  "));
    }
    spans.pop();
    spans
}

fn render_distribution(f: &mut Frame, app: &App, area: Rect) {
    let rows = app.dimensions().rows();
    let distribution = Paragraph::new(Line::from(distribution_spans(&app.stats, rows)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Wins by guesses ")
                .borders(Borders::ALL),
        );
    f.render_widget(distribution, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let game = app.session.game();
    let (status_text, color) = match game.status() {
        GameStatus::Playing => (
            format!("Guess {}/{}", game.guesses_used() + 1, game.dimensions().rows()),
            Color::White,
        ),
        GameStatus::Won => ("You won!".to_string(), Color::Green),
        GameStatus::Lost => ("Game over".to_string(), Color::Red),
    };
    let status = Paragraph::new(status_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD));
    f.render_widget(status, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if game.is_over() {
        "Esc: Quit | Ctrl+N: New Game | Tab: Reveal"
    } else {
        "Esc: Quit | Enter: Submit | +/-: Letters | [/]: Rows | Tab: Reveal"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Command, Dimensions};
    use crate::input::Action;
    use crate::session::Session;
    use crate::wordlists::WordBank;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn app(letters: usize, rows: usize) -> App {
        let session = Session::new(
            WordBank::embedded(),
            Dimensions::new(letters, rows).unwrap(),
            StdRng::seed_from_u64(1),
        )
        .unwrap();
        App::new(session)
    }

    #[test]
    fn renders_board_and_status() {
        let screen = draw(&app(4, 3));
        assert!(screen.contains("WORDLE GRID"));
        assert!(screen.contains("4x3"));
        assert!(screen.contains("Guess 1/3"));
        assert!(screen.contains("ENTER"));
    }

    #[test]
    fn typed_letters_appear() {
        let mut app = app(5, 6);
        for ch in "QZ".chars() {
            app.handle_action(Action::Game(Command::TypeLetter(ch)));
        }
        let lines = board_lines(app.session.game());
        let first: String = lines[0].spans.iter().map(|s| &*s.content).collect();
        assert!(first.starts_with(" Q   Z "));
    }

    #[test]
    fn secret_hidden_until_revealed() {
        let mut app = app(5, 6);
        let hidden = draw(&app);
        app.handle_action(Action::ToggleReveal);
        let secret = app.session.visible_secret().unwrap().text().to_string();
        assert!(!hidden.contains(&format!("| {secret}")));
        assert!(draw(&app).contains(&format!("| {secret}")));
    }

    #[test]
    fn distribution_shows_wins_per_guess_count() {
        let mut app = app(5, 6);
        assert!(draw(&app).contains("1:0  2:0  3:0  4:0  5:0  6:0"));

        app.handle_action(Action::ToggleReveal);
        let secret = app.session.visible_secret().unwrap().text().to_string();
        for ch in secret.chars() {
            app.handle_action(Action::Game(Command::TypeLetter(ch)));
        }
        app.handle_action(Action::Game(Command::SubmitGuess));

        let screen = draw(&app);
        assert!(screen.contains("Wins by guesses"));
        assert!(screen.contains("1:1  2:0"));
        assert!(!screen.contains("7:"));
    }

    #[test]
    fn distribution_keeps_wins_from_larger_grids() {
        let mut stats = Statistics::default();
        stats.guess_distribution[8] = 2;
        let text: String = distribution_spans(&stats, 3)
            .iter()
            .map(|s| &*s.content)
            .collect();
        assert!(text.starts_with("1:0  2:0  3:0"));
        assert!(text.ends_with("8:2"));

        let short: String = distribution_spans(&Statistics::default(), 2)
            .iter()
            .map(|s| &*s.content)
            .collect();
        assert_eq!(short, "1:0  2:0");
    }

    #[test]
    fn verdict_colors() {
        assert_eq!(verdict_color(Verdict::Correct), Color::Green);
        assert_eq!(verdict_color(Verdict::Present), Color::Yellow);
        assert_eq!(verdict_color(Verdict::Absent), Color::DarkGray);
    }
}
