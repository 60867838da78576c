//! Turn loop orchestration
//!
//! `GameSession` ties a `GameEngine` to a `GameView`, the collaborator that
//! renders state and supplies candidate words. The session checks input
//! preconditions (length, dictionary membership) itself and re-prompts, so
//! the engine only ever sees well-formed guesses.

use super::{GameEngine, HistoryEntry};
use crate::core::{GameError, Word, normalize};
use crate::dictionary::WordPicker;
use std::collections::BTreeSet;
use std::io;
use thiserror::Error;

/// Rendering and input collaborator for a session
pub trait GameView {
    fn show_welcome(&mut self, word_length: usize, max_attempts: usize) -> io::Result<()>;

    fn show_history(&mut self, history: &[HistoryEntry]) -> io::Result<()>;

    fn show_used_letters(&mut self, used: &BTreeSet<char>) -> io::Result<()>;

    /// Called for input that is the wrong length or not in the dictionary
    fn show_invalid_word(&mut self, word: &str) -> io::Result<()>;

    /// Called once with the full history when the last guess matched
    fn show_win(&mut self, history: &[HistoryEntry]) -> io::Result<()>;

    fn show_loss(&mut self, target: &Word) -> io::Result<()>;

    /// Next candidate word, or `None` if the player quits or input ends
    fn read_word(&mut self) -> io::Result<Option<String>>;
}

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    Won { attempts: usize },
    Lost { target: Word },
    Abandoned,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Game(#[from] GameError),
}

/// Drives one engine through complete games against a view
pub struct GameSession<'a, P: WordPicker, V: GameView> {
    engine: GameEngine<'a, P>,
    view: V,
}

impl<'a, P: WordPicker, V: GameView> GameSession<'a, P, V> {
    pub const fn new(engine: GameEngine<'a, P>, view: V) -> Self {
        Self { engine, view }
    }

    /// Play one full game, starting from a fresh target
    ///
    /// # Errors
    /// Returns `SessionError::Io` if the view fails, or `SessionError::Game`
    /// if the engine cannot select a target.
    pub fn play(&mut self) -> Result<SessionOutcome, SessionError> {
        self.engine.reset()?;
        self.view
            .show_welcome(self.engine.word_length(), self.engine.max_attempts())?;

        while self.engine.attempts_remaining() {
            self.view.show_history(self.engine.history())?;
            self.view.show_used_letters(self.engine.used_letters())?;

            let Some(raw) = self.view.read_word()? else {
                return Ok(SessionOutcome::Abandoned);
            };

            let word = normalize(&raw);
            if word.chars().count() != self.engine.word_length()
                || !self.engine.is_valid_word(&word)
            {
                self.view.show_invalid_word(&word)?;
                continue;
            }

            self.engine.submit_guess(&word)?;

            if self.engine.has_won() {
                let attempts = self.engine.attempt_count();
                self.view.show_history(self.engine.history())?;
                self.view.show_win(self.engine.history())?;
                return Ok(SessionOutcome::Won { attempts });
            }
        }

        let target = self.engine.target_word().clone();
        self.view.show_history(self.engine.history())?;
        self.view.show_loss(&target)?;
        Ok(SessionOutcome::Lost { target })
    }

    #[must_use]
    pub const fn engine(&self) -> &GameEngine<'a, P> {
        &self.engine
    }

    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    pub const fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_parts(self) -> (GameEngine<'a, P>, V) {
        (self.engine, self.view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{Dictionary, FixedPicker};
    use crate::game::GameConfig;
    use std::collections::VecDeque;

    #[derive(Default)]
    struct ScriptedView {
        input: VecDeque<String>,
        events: Vec<String>,
    }

    impl ScriptedView {
        fn with_input(words: &[&str]) -> Self {
            Self {
                input: words.iter().map(ToString::to_string).collect(),
                events: Vec::new(),
            }
        }

        fn count(&self, prefix: &str) -> usize {
            self.events.iter().filter(|e| e.starts_with(prefix)).count()
        }
    }

    impl GameView for ScriptedView {
        fn show_welcome(&mut self, word_length: usize, max_attempts: usize) -> io::Result<()> {
            self.events.push(format!("welcome {word_length} {max_attempts}"));
            Ok(())
        }

        fn show_history(&mut self, history: &[HistoryEntry]) -> io::Result<()> {
            self.events.push(format!("history {}", history.len()));
            Ok(())
        }

        fn show_used_letters(&mut self, used: &BTreeSet<char>) -> io::Result<()> {
            self.events.push(format!("used {}", used.iter().collect::<String>()));
            Ok(())
        }

        fn show_invalid_word(&mut self, word: &str) -> io::Result<()> {
            self.events.push(format!("invalid {word}"));
            Ok(())
        }

        fn show_win(&mut self, history: &[HistoryEntry]) -> io::Result<()> {
            self.events.push(format!("win {}", history.len()));
            Ok(())
        }

        fn show_loss(&mut self, target: &Word) -> io::Result<()> {
            self.events.push(format!("loss {target}"));
            Ok(())
        }

        fn read_word(&mut self) -> io::Result<Option<String>> {
            Ok(self.input.pop_front())
        }
    }

    fn dictionary() -> Dictionary {
        Dictionary::parse(["pling", "släkt", "kropp", "kupar"]).unwrap()
    }

    fn session<'a>(
        dictionary: &'a Dictionary,
        max_attempts: usize,
        input: &[&str],
    ) -> GameSession<'a, FixedPicker, ScriptedView> {
        let engine = GameEngine::new(
            dictionary,
            FixedPicker::new("kupar"),
            GameConfig::new(max_attempts),
        )
        .unwrap();
        GameSession::new(engine, ScriptedView::with_input(input))
    }

    #[test]
    fn win_after_invalid_input() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, 6, &["PLING", "zzzzz", "kup", "kupar"]);

        let outcome = session.play().unwrap();

        assert_eq!(outcome, SessionOutcome::Won { attempts: 2 });
        let view = session.view();
        assert_eq!(view.events[0], "welcome 5 6");
        assert_eq!(view.count("invalid"), 2);
        assert!(view.events.contains(&"invalid zzzzz".to_string()));
        assert!(view.events.contains(&"used gilnp".to_string()));
        assert_eq!(view.events.last().unwrap(), "win 2");
        assert_eq!(session.engine().attempt_count(), 2);
    }

    #[test]
    fn loss_reveals_target() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, 3, &["pling", "kropp", "släkt", "kupar"]);

        let outcome = session.play().unwrap();

        assert_eq!(
            outcome,
            SessionOutcome::Lost {
                target: Word::new("kupar").unwrap()
            }
        );
        let view = session.view();
        assert_eq!(view.events.last().unwrap(), "loss kupar");
        assert_eq!(view.count("win"), 0);
        // The fourth word is never read
        assert_eq!(view.input.len(), 1);
    }

    #[test]
    fn end_of_input_abandons() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, 6, &["pling"]);

        assert_eq!(session.play().unwrap(), SessionOutcome::Abandoned);
        assert_eq!(session.engine().attempt_count(), 1);
    }

    #[test]
    fn play_again_starts_fresh() {
        let dictionary = dictionary();
        let mut session = session(&dictionary, 6, &["kupar", "pling", "kupar"]);

        assert_eq!(session.play().unwrap(), SessionOutcome::Won { attempts: 1 });
        assert_eq!(session.play().unwrap(), SessionOutcome::Won { attempts: 2 });

        let (engine, view) = session.into_parts();
        assert_eq!(engine.history().len(), 2);
        assert_eq!(view.count("welcome"), 2);
    }
}
