//! Game state and turn orchestration

mod engine;
mod session;

pub use engine::{
    DEFAULT_MAX_ATTEMPTS, GameConfig, GameEngine, GameStatus, GuessOutcome, HistoryEntry,
};
pub use session::{GameSession, GameView, SessionError, SessionOutcome};
