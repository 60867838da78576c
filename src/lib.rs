//! Wordle Game
//!
//! A word-guessing game engine with a terminal UI and a plain console front end.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Mark, Score, Word};
//! use wordle_game::dictionary::{Dictionary, FixedPicker};
//! use wordle_game::game::{GameConfig, GameEngine};
//!
//! // Score one guess directly
//! let guess = Word::new("kropp").unwrap();
//! let target = Word::new("kupar").unwrap();
//! let score = Score::calculate(&guess, &target).unwrap();
//! assert_eq!(score.marks()[0], Mark::CorrectPosition);
//!
//! // Or play a whole game
//! let dictionary = Dictionary::parse(["pling", "släkt", "kropp", "kupar"]).unwrap();
//! let mut engine =
//!     GameEngine::new(&dictionary, FixedPicker::new("kupar"), GameConfig::default()).unwrap();
//! engine.submit_guess("kupar").unwrap();
//! assert!(engine.has_won());
//! ```

// Core domain types
pub mod core;

// Valid word set and target selection
pub mod dictionary;

// Game state and turn loop
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
