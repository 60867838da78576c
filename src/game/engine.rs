//! Game state engine
//!
//! Owns the target word, the guess history and the used-letter set for one
//! session. Win and loss are recomputed from the history on every query.

use crate::core::{GameError, Score, Word, normalize};
use crate::dictionary::{Dictionary, WordPicker};
use log::{debug, trace};
use std::collections::BTreeSet;

/// Default number of attempts per game
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_attempts: usize,
}

impl GameConfig {
    #[must_use]
    pub const fn new(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    /// # Errors
    /// Returns `GameError::InvalidConfig` if `max_attempts` is zero.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.max_attempts == 0 {
            return Err(GameError::InvalidConfig("max_attempts must be at least 1"));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

/// Derived session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Result of submitting a guess that was not a usage error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The word was scored and counted as an attempt
    Accepted(Score),
    /// The word is not in the dictionary; nothing changed
    Rejected,
}

impl GuessOutcome {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    #[must_use]
    pub const fn score(&self) -> Option<&Score> {
        match self {
            Self::Accepted(score) => Some(score),
            Self::Rejected => None,
        }
    }
}

/// One accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub word: Word,
    pub score: Score,
}

/// The game state machine for one session
pub struct GameEngine<'a, P: WordPicker> {
    dictionary: &'a Dictionary,
    picker: P,
    max_attempts: usize,
    target: Word,
    history: Vec<HistoryEntry>,
    used_letters: BTreeSet<char>,
}

impl<'a, P: WordPicker> GameEngine<'a, P> {
    /// Create an engine and select the first target word
    ///
    /// # Errors
    /// - `GameError::InvalidConfig` if `config.max_attempts` is zero
    /// - `GameError::EmptyDictionary` if the picker yields no target
    ///
    /// # Examples
    /// ```
    /// use wordle_game::dictionary::{Dictionary, FixedPicker};
    /// use wordle_game::game::{GameConfig, GameEngine, GuessOutcome};
    ///
    /// let dictionary = Dictionary::parse(["pling", "kropp", "kupar"]).unwrap();
    /// let mut engine =
    ///     GameEngine::new(&dictionary, FixedPicker::new("kupar"), GameConfig::default()).unwrap();
    ///
    /// assert_eq!(engine.submit_guess("zzzzz").unwrap(), GuessOutcome::Rejected);
    /// let outcome = engine.submit_guess("KUPAR").unwrap();
    /// assert!(outcome.score().unwrap().is_perfect());
    /// assert!(engine.has_won());
    /// ```
    pub fn new(
        dictionary: &'a Dictionary,
        mut picker: P,
        config: GameConfig,
    ) -> Result<Self, GameError> {
        config.validate()?;
        let target = dictionary.random_word(&mut picker)?.clone();
        trace!("target selected: {target}");

        Ok(Self {
            dictionary,
            picker,
            max_attempts: config.max_attempts,
            target,
            history: Vec::new(),
            used_letters: BTreeSet::new(),
        })
    }

    /// True if the word is in the dictionary
    #[must_use]
    pub fn is_valid_word(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    /// Score a word against the target without touching any state
    ///
    /// The word does not have to be in the dictionary.
    ///
    /// # Errors
    /// - `GameError::InvalidWord` if `word` is not a well-formed word
    /// - `GameError::LengthMismatch` if its length differs from the target's
    pub fn score_guess(&self, word: &str) -> Result<Score, GameError> {
        let guess = Word::new(word)?;
        Score::calculate(&guess, &self.target)
    }

    /// Play one guess
    ///
    /// Unknown words come back as `GuessOutcome::Rejected` and do not use up
    /// an attempt.
    ///
    /// # Errors
    /// - `GameError::NoAttemptsLeft` if every attempt has been used
    /// - `GameError::LengthMismatch` if the normalized word does not have the
    ///   dictionary's word length
    pub fn submit_guess(&mut self, word: &str) -> Result<GuessOutcome, GameError> {
        if !self.attempts_remaining() {
            return Err(GameError::NoAttemptsLeft);
        }

        let normalized = normalize(word);
        let length = normalized.chars().count();
        if length != self.word_length() {
            return Err(GameError::LengthMismatch {
                expected: self.word_length(),
                actual: length,
            });
        }

        let Some(guess) = self.dictionary.get(&normalized) else {
            debug!("rejected {normalized:?}: not in dictionary");
            return Ok(GuessOutcome::Rejected);
        };

        let score = Score::calculate(guess, &self.target)?;
        self.used_letters.extend(guess.letters().iter().copied());
        self.history.push(HistoryEntry {
            word: guess.clone(),
            score: score.clone(),
        });
        debug!(
            "accepted {guess} {score} ({}/{})",
            self.attempt_count(),
            self.max_attempts
        );

        Ok(GuessOutcome::Accepted(score))
    }

    /// True if the latest accepted guess matched the target
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.history.last().is_some_and(|entry| entry.score.is_perfect())
    }

    /// True while another guess may be submitted
    #[must_use]
    pub fn attempts_remaining(&self) -> bool {
        self.attempt_count() < self.max_attempts
    }

    /// Number of attempts still available
    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.max_attempts.saturating_sub(self.attempt_count())
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.has_won() {
            GameStatus::Won
        } else if self.attempts_remaining() {
            GameStatus::InProgress
        } else {
            GameStatus::Lost
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status() != GameStatus::InProgress
    }

    /// Start a fresh session with a newly selected target
    ///
    /// The new target may equal the previous one.
    ///
    /// # Errors
    /// Returns `GameError::EmptyDictionary` if the picker yields no word.
    pub fn reset(&mut self) -> Result<(), GameError> {
        self.target = self.dictionary.random_word(&mut self.picker)?.clone();
        self.history.clear();
        self.used_letters.clear();
        debug!("game reset");
        trace!("target selected: {}", self.target);
        Ok(())
    }

    /// Accepted guesses so far
    #[inline]
    #[must_use]
    pub fn attempt_count(&self) -> usize {
        self.history.len()
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.dictionary.word_length()
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Letters from every accepted guess
    #[inline]
    #[must_use]
    pub const fn used_letters(&self) -> &BTreeSet<char> {
        &self.used_letters
    }

    #[inline]
    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    /// The hidden word, regardless of game state
    ///
    /// Front ends should prefer [`GameEngine::revealed_target`].
    #[inline]
    #[must_use]
    pub const fn target_word(&self) -> &Word {
        &self.target
    }

    /// The hidden word, once the game is over
    #[must_use]
    pub fn revealed_target(&self) -> Option<&Word> {
        self.is_over().then_some(&self.target)
    }
}
