//! Core domain types for the game
//!
//! Words, marks and the scoring algorithm. Everything here is pure and has
//! no knowledge of dictionaries, sessions or presentation.

mod error;
mod score;
mod word;

pub use error::GameError;
pub use score::{Mark, Score};
pub use word::{Word, WordError, normalize};
