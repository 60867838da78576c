//! Game word representation
//!
//! A Word stores a lowercased word along with its letters for scoring.
//! Letters are Unicode scalar values, so dictionaries such as Swedish
//! (`släkt`, `kropp`) work the same way as English ones.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// A normalized, alphabetic word
///
/// Length is measured in letters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: Vec<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must not be empty")]
    Empty,
    #[error("word contains invalid character {0:?}")]
    InvalidCharacter(char),
}

/// Normalize raw player or file input the way every dictionary lookup does
///
/// Trims surrounding whitespace and lowercases.
///
/// # Examples
/// ```
/// use wordle_game::core::normalize;
///
/// assert_eq!(normalize("  KuPaR\n"), "kupar");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is normalized first (see [`normalize`]).
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The normalized text is empty
    /// - Any character is not alphabetic
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("Kropp").unwrap();
    /// assert_eq!(word.text(), "kropp");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// assert!(Word::new("   ").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = normalize(text.as_ref());

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(bad) = text.chars().find(|c| !c.is_alphabetic()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        let letters = text.chars().collect();
        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters of the word in order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false for a constructed word; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Get the count of each letter in the word
    ///
    /// Used for scoring with duplicate letters.
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for &ch in &self.letters {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
