//! Terminal output formatting
//!
//! Display utilities for the line-based front end.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_game_over, print_keyboard, print_score_result};
