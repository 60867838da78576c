//! Guess feedback: per-letter marks and the scoring algorithm
//!
//! Each guessed letter receives one [`Mark`]:
//! - 0 = Absent (letter not in the target, or all its occurrences used up)
//! - 1 = `WrongPosition` (letter in the target, different position)
//! - 2 = `CorrectPosition` (letter in the same position)
//!
//! The integer values are stable and are what [`Score::values`] exposes.

use super::{GameError, Word};
use std::fmt;

/// Feedback for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Mark {
    Absent = 0,
    WrongPosition = 1,
    CorrectPosition = 2,
}

impl Mark {
    /// Stable integer encoding of the mark
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Decode a mark from its integer encoding
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Absent),
            1 => Some(Self::WrongPosition),
            2 => Some(Self::CorrectPosition),
            _ => None,
        }
    }

    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::WrongPosition => '🟨',
            Self::CorrectPosition => '🟩',
        }
    }
}

/// The marks for one whole guess, in letter order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Score(Vec<Mark>);

impl Score {
    #[must_use]
    pub const fn new(marks: Vec<Mark>) -> Self {
        Self(marks)
    }

    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if every letter is in its correct position
    ///
    /// An empty score is never perfect.
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&m| m == Mark::CorrectPosition)
    }

    /// Count the letters that received a given mark
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&m| m == mark).count()
    }

    /// Integer encoding of every mark, in order
    #[must_use]
    pub fn values(&self) -> Vec<u8> {
        self.0.iter().map(|m| m.value()).collect()
    }

    /// Score `guess` against `target`
    ///
    /// Implements the standard feedback rules, including proper handling of
    /// repeated letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark all exact matches and remove them from the pool of
    ///    target letters
    /// 2. Second pass: mark present-but-misplaced letters from what is left
    ///    of the pool, left to right
    ///
    /// A target letter is credited at most once, and exact matches claim it
    /// before any misplaced mark does.
    ///
    /// # Errors
    /// Returns `GameError::LengthMismatch` if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Mark, Score, Word};
    ///
    /// let guess = Word::new("kropp").unwrap();
    /// let target = Word::new("kupar").unwrap();
    /// let score = Score::calculate(&guess, &target).unwrap();
    ///
    /// assert_eq!(score.values(), vec![2, 1, 0, 1, 0]);
    /// assert_eq!(score.marks()[4], Mark::Absent);
    /// ```
    pub fn calculate(guess: &Word, target: &Word) -> Result<Self, GameError> {
        if guess.len() != target.len() {
            return Err(GameError::LengthMismatch {
                expected: target.len(),
                actual: guess.len(),
            });
        }

        let guess_letters = guess.letters();
        let target_letters = target.letters();
        let mut result = vec![Mark::Absent; guess_letters.len()];
        let mut remaining = target.letter_counts();

        // First pass: exact position matches
        for (i, (g, t)) in guess_letters.iter().zip(target_letters).enumerate() {
            if g == t {
                result[i] = Mark::CorrectPosition;
                if let Some(count) = remaining.get_mut(g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters, drawn from what exact matches left
        for (i, letter) in guess_letters.iter().enumerate() {
            if result[i] == Mark::CorrectPosition {
                continue;
            }
            if let Some(count) = remaining.get_mut(letter)
                && *count > 0
            {
                result[i] = Mark::WrongPosition;
                *count -= 1;
            }
        }

        Ok(Self(result))
    }

    /// Render as a string like "🟩🟨⬜🟨⬜"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.to_emoji()).collect()
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
