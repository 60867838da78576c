//! Terminal output formatting
//!
//! Grid rendering and console messages for the text front end.

pub mod display;
pub mod formatters;

pub use display::{write_game_over, write_invalid_word, write_welcome, write_win};
pub use formatters::{render_grid, render_used_letters};
