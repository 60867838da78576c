//! Errors raised by the game core
//!
//! These are usage and configuration errors. An unknown word is not one of
//! them: it comes back as `GuessOutcome::Rejected`.

use super::WordError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    #[error("guess has {actual} letters, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("dictionary has no words to choose from")]
    EmptyDictionary,

    #[error("dictionary word {word:?} does not have {expected} letters")]
    InconsistentWordLength { expected: usize, word: String },

    #[error("no attempts left in this game")]
    NoAttemptsLeft,

    #[error(transparent)]
    InvalidWord(#[from] WordError),
}
