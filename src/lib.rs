//! Wordle Grid
//!
//! Wordle with an adjustable grid: words of 2 to 6 letters, 2 to 8 guess rows.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_grid::core::{Verdict, Word, score};
//!
//! let guess = Word::new("crane").unwrap();
//! let secret = Word::new("slate").unwrap();
//!
//! let result = score(&guess, &secret).unwrap();
//! assert_eq!(result.letters()[2], Verdict::Correct);
//! assert_eq!(result.keys().get(b'C'), Verdict::Absent);
//! ```

// Scoring and letter types
pub mod core;

// Game state machine
pub mod game;

// Command queue, reveal toggle and secret drawing
pub mod session;

// Word lists
pub mod wordlists;

// Key input mapping
pub mod input;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
